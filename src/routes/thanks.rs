use askama::Template;
use axum::extract::{RawQuery, State};

use crate::answer::Answer;
use crate::copy::{CopiedFlag, COPIED_LABEL, RESET_AFTER};
use crate::share::{create_intent_link, share_text};
use crate::AppState;

/// The page the form service redirects respondents to after they submitted
#[derive(Template)]
#[template(path = "thanks.html")]
pub(crate) struct ThanksTemplate {
    answer: Answer,
    share_text: String,
    intent_link: String,
    copy_label: &'static str,
    copied_label: &'static str,
    reset_after_ms: u128,
}

impl ThanksTemplate {
    fn new(answer: Answer, intent_url: &url::Url) -> Self {
        let share_text = share_text(&answer);
        let intent_link = create_intent_link(intent_url, &share_text);

        Self {
            answer,
            share_text,
            intent_link,
            // Nothing has been copied when the page loads
            copy_label: CopiedFlag::default().label(),
            copied_label: COPIED_LABEL,
            reset_after_ms: RESET_AFTER.as_millis(),
        }
    }
}

pub(crate) async fn get_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ThanksTemplate {
    let answer = Answer::from_query(query.as_deref());
    tracing::debug!("Rendering thanks page for answer \"{answer}\"");

    ThanksTemplate::new(answer, &state.configuration.intent_url)
}
