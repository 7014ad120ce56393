use super::{BaseAttrs, push_opt_attr};
use crate::attrs::{push_open_end, push_str_attr};
use crate::escape::escape;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str(&escape(&self.text));
    }
}

/// Mention of a user, a role, or everyone (`type="all"`) / everyone online (`type="here"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct At {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl At {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    pub fn all() -> Self {
        Self {
            kind: Some("all".to_string()),
            ..Self::default()
        }
    }

    pub fn here() -> Self {
        Self {
            kind: Some("here".to_string()),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<at");
        push_opt_attr(out, "id", self.id.as_deref());
        push_opt_attr(out, "name", self.name.as_deref());
        push_opt_attr(out, "role", self.role.as_deref());
        push_opt_attr(out, "type", self.kind.as_deref());
        self.base.render_into(out);
        out.push_str("/>");
    }
}

/// Channel reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sharp {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl Sharp {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<sharp");
        push_str_attr(out, "id", &self.id);
        push_opt_attr(out, "name", self.name.as_deref());
        self.base.render_into(out);
        out.push_str("/>");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
    /// Text content of the link, when the source wrapped any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<a");
        push_str_attr(out, "href", &self.href);
        self.base.render_into(out);
        match self.display.as_deref() {
            Some(display) if !display.is_empty() => {
                push_open_end(out);
                out.push_str(&escape(display));
                out.push_str("</a>");
            }
            _ => out.push_str("/>"),
        }
    }
}

/// Overrides the displayed sender of the enclosing message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl Author {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<author");
        push_opt_attr(out, "id", self.id.as_deref());
        push_opt_attr(out, "nickname", self.nickname.as_deref());
        push_opt_attr(out, "avatar", self.avatar.as_deref());
        self.base.render_into(out);
        out.push_str("/>");
    }
}
