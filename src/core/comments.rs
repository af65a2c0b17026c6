use crate::core::{CommentsResponse, Mount, PageContext, Widget, WidgetRequest};
use crate::domain::model::Comment;
use crate::domain::page::COMMENTS_MOUNT;
use crate::utils::html::{escape_html, render_failure};
use serde_json::Value;

pub const EMPTY_MESSAGE: &str = r#"<span class="not-found">Sem comentários</span>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct CommentsWidget;

impl CommentsWidget {
    pub fn render_response(&self, response: &CommentsResponse) -> String {
        match response {
            CommentsResponse::Failed { detail } => render_failure(detail.as_deref()),
            CommentsResponse::Empty => EMPTY_MESSAGE.to_string(),
            CommentsResponse::Listed(comments) => comments.iter().map(render_comment).collect(),
        }
    }
}

fn render_comment(comment: &Comment) -> String {
    format!(
        r#"<div class="comment-item"><div class="comment-meta">{} &middot; {}</div><div class="comment-text">{}</div></div>"#,
        escape_html(&comment.author),
        escape_html(&comment.date),
        escape_html(&comment.text)
    )
}

impl Widget for CommentsWidget {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn mount(&self) -> Mount {
        COMMENTS_MOUNT
    }

    fn request(&self, context: &PageContext) -> Option<WidgetRequest> {
        let post_id = context.post_id.as_ref()?;
        Some(WidgetRequest {
            endpoint: context.endpoints.comments.clone(),
            query: vec![("post_id".to_string(), post_id.clone())],
        })
    }

    fn render(&self, payload: Value) -> String {
        self.render_response(&CommentsResponse::from_value(&payload))
    }
}
