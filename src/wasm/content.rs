//! Fills the page's placeholder markup from [`PortfolioConfig`].

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::{PortfolioConfig, Project};

pub(crate) fn populate(document: &Document, config: &PortfolioConfig) -> Result<(), JsValue> {
    for (field, value) in [
        ("name", &config.name),
        ("title", &config.title),
        ("email", &config.email),
        ("phone", &config.phone),
        ("location", &config.location),
        ("bio", &config.about.bio),
    ] {
        let nodes = document.query_selector_all(&format!("[data-field=\"{field}\"]"))?;
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                node.set_text_content(Some(value));
            }
        }
    }

    let social = &config.social;
    for (network, href) in [
        ("github", format!("https://github.com/{}", social.github)),
        ("linkedin", format!("https://linkedin.com/in/{}", social.linkedin)),
        ("twitter", format!("https://twitter.com/{}", social.twitter)),
        ("instagram", format!("https://instagram.com/{}", social.instagram)),
    ] {
        if let Some(link) = document.query_selector(&format!("a[data-social=\"{network}\"]"))? {
            link.set_attribute("href", &href)?;
        }
    }
    if let Some(mail) = document.query_selector("a[data-field-href=\"email\"]")? {
        mail.set_attribute("href", &format!("mailto:{}", config.email))?;
    }

    if let Some(root) = document.document_element() {
        let vars = format!(
            "--primary-color: {}; --secondary-color: {};",
            config.colors.primary, config.colors.secondary
        );
        root.set_attribute("style", &vars)?;
    }

    if let Some(grid) = document.query_selector(".projects-grid")? {
        grid.set_inner_html("");
        for project in &config.projects {
            grid.append_child(&project_card(document, project)?)?;
        }
    }
    if let Some(grid) = document.query_selector(".skills-grid")? {
        grid.set_inner_html("");
        for skill in &config.about.skills {
            grid.append_child(&tagged(document, "span", "skill", skill)?)?;
        }
    }
    log::debug!("content populated: {} projects", config.projects.len());
    Ok(())
}

fn project_card(document: &Document, project: &Project) -> Result<Element, JsValue> {
    let card = tagged(document, "div", "project-card", "")?;

    let image = tagged(document, "div", "project-image", "")?;
    let (from, to) = &project.gradient;
    image.set_attribute("style", &format!("background: linear-gradient(45deg, {from} 0%, {to} 100%)"))?;
    card.append_child(&image)?;

    card.append_child(&tagged(document, "h3", "project-title", &project.title)?)?;
    card.append_child(&tagged(document, "p", "project-description", &project.description)?)?;

    let tech = tagged(document, "div", "project-tech", "")?;
    for t in &project.technologies {
        tech.append_child(&tagged(document, "span", "tech-tag", t)?)?;
    }
    card.append_child(&tech)?;
    Ok(card)
}

fn tagged(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    if !text.is_empty() {
        el.set_text_content(Some(text));
    }
    Ok(el)
}
