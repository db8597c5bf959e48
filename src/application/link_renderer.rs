// Link renderer - Plain field copy of a converged dashboard link
use crate::domain::document::LinkFragment;
use crate::domain::error::TemplateError;
use crate::domain::link::Link;
use crate::domain::template::{Instance, TemplateKind};

pub fn render_link(instance: &Instance<Link>) -> Result<LinkFragment, TemplateError> {
    let link = &instance.template;
    let url = link.url.clone().ok_or_else(|| TemplateError::MissingField {
        kind: TemplateKind::Link,
        name: instance.name.clone(),
        field: "url",
    })?;

    Ok(LinkFragment {
        icon: link.icon.clone().unwrap_or_else(|| "external link".to_string()),
        tags: link.tags.clone().unwrap_or_default(),
        target_blank: link.target_blank.unwrap_or(false),
        link_type: link.link_type.clone().unwrap_or_else(|| "link".to_string()),
        url,
        title: link.title.clone().unwrap_or_default(),
    })
}
