use super::{BaseAttrs, push_opt_attr};
use crate::attrs::{AttrValue, push_attr, push_str_attr};
use serde::Serialize;

/// Fields shared by every resource element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceAttrs {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the platform may serve the resource from its cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    /// Download timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl ResourceAttrs {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    fn render_into(&self, out: &mut String) {
        push_str_attr(out, "src", &self.src);
        push_opt_attr(out, "title", self.title.as_deref());
        if let Some(cache) = self.cache {
            push_attr(out, "cache", &AttrValue::Bool(cache));
        }
        push_number(out, "timeout", self.timeout.map(|t| t.to_string()));
    }
}

// Numbers are rendered quoted: the attribute grammar only reads quoted values.
fn push_number(out: &mut String, key: &str, value: Option<String>) {
    if let Some(value) = value {
        push_str_attr(out, key, &value);
    }
}

macro_rules! resource_builders {
    ($ty:ident) => {
        impl $ty {
            pub fn new(src: impl Into<String>) -> Self {
                Self {
                    resource: ResourceAttrs::new(src),
                    ..Self::default()
                }
            }

            pub fn title(mut self, title: impl Into<String>) -> Self {
                self.resource.title = Some(title.into());
                self
            }

            pub fn cache(mut self, cache: bool) -> Self {
                self.resource.cache = Some(cache);
                self
            }

            pub fn timeout(mut self, timeout_ms: u64) -> Self {
                self.resource.timeout = Some(timeout_ms);
                self
            }

            pub fn src(&self) -> &str {
                &self.resource.src
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Image {
    #[serde(flatten)]
    pub resource: ResourceAttrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

resource_builders!(Image);

impl Image {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<img");
        self.resource.render_into(out);
        push_number(out, "width", self.width.map(|w| w.to_string()));
        push_number(out, "height", self.height.map(|h| h.to_string()));
        self.base.render_into(out);
        out.push_str("/>");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Audio {
    #[serde(flatten)]
    pub resource: ResourceAttrs,
    /// Length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

resource_builders!(Audio);

impl Audio {
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<audio");
        self.resource.render_into(out);
        push_number(out, "duration", self.duration.map(|d| d.to_string()));
        push_opt_attr(out, "poster", self.poster.as_deref());
        self.base.render_into(out);
        out.push_str("/>");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Video {
    #[serde(flatten)]
    pub resource: ResourceAttrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

resource_builders!(Video);

impl Video {
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<video");
        self.resource.render_into(out);
        push_number(out, "duration", self.duration.map(|d| d.to_string()));
        push_opt_attr(out, "poster", self.poster.as_deref());
        self.base.render_into(out);
        out.push_str("/>");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct File {
    #[serde(flatten)]
    pub resource: ResourceAttrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

resource_builders!(File);

impl File {
    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<file");
        self.resource.render_into(out);
        push_opt_attr(out, "poster", self.poster.as_deref());
        self.base.render_into(out);
        out.push_str("/>");
    }
}
