//! The host page's placeholder elements, as data.

use crate::utils::html::escape_html;

pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount {
    pub spinner_id: &'static str,
    pub content_id: &'static str,
}

pub const WHATSAPP_MOUNT: Mount = Mount {
    spinner_id: "wa-spinner",
    content_id: "wa-content",
};

pub const COMMENTS_MOUNT: Mount = Mount {
    spinner_id: "comments-spinner",
    content_id: "comments-content",
};

/// A spinner plus the content element it stands in for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    mount: Mount,
    spinner: bool,
    hidden: bool,
    inner_html: String,
}

impl Region {
    pub fn loading(mount: Mount) -> Self {
        Self {
            mount,
            spinner: true,
            hidden: true,
            inner_html: String::new(),
        }
    }

    /// Removes the spinner, replaces the content and reveals it.
    pub fn settle(&mut self, html: String) {
        self.spinner = false;
        self.inner_html = html;
        self.hidden = false;
    }

    pub fn is_loading(&self) -> bool {
        self.spinner
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if self.spinner {
            html += &format!(r#"<div id="{}" class="spinner"></div>"#, self.mount.spinner_id);
        }
        let class = if self.hidden {
            format!(r#" class="{}""#, HIDDEN_CLASS)
        } else {
            String::new()
        };
        html += &format!(
            r#"<div id="{}"{}>{}</div>"#,
            self.mount.content_id, class, self.inner_html
        );
        html
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub display_number: String,
    pub whatsapp: Region,
    /// Only present when the page has a content identifier.
    pub comments: Option<Region>,
}

impl Page {
    pub fn new(display_number: String, with_comments: bool) -> Self {
        Self {
            display_number,
            whatsapp: Region::loading(WHATSAPP_MOUNT),
            comments: with_comments.then(|| Region::loading(COMMENTS_MOUNT)),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<main class=\"lookup\">\n");
        html += &format!(
            "<h1 class=\"number\">{}</h1>\n",
            escape_html(&self.display_number)
        );
        html += &format!(
            "<section class=\"whatsapp\"><h2>WhatsApp</h2>{}</section>\n",
            self.whatsapp.to_html()
        );
        if let Some(comments) = &self.comments {
            html += &format!(
                "<section class=\"comments\"><h2>Comentários</h2>{}</section>\n",
                comments.to_html()
            );
        }
        html += "</main>\n";
        html
    }
}
