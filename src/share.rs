use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::answer::Answer;

/// Everything `encodeURIComponent` escapes
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const CAMPAIGN_LINES: &str = "新技術 #リライブエンジン 搭載の #リライブパワーリストバンド １万個無料配布プロジェクト実施中！
詳細・ご応募はこちらから👉　https://x.gd/HapjS
#みんなでエンジン始動 #その動きエンジンがかかる";

/// The campaign message with the answer substituted once. The campaign link is part of the text,
/// so the intent link carries no separate `url` parameter.
pub fn share_text(answer: &Answer) -> String {
    format!("私にとってのリライブパワーリストバンドは「{answer}」！\n\n{CAMPAIGN_LINES}")
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Creates the compose post link for the share text, e.g. `https://x.com/intent/tweet?text=...`
pub fn create_intent_link(intent_url: &Url, share_text: &str) -> String {
    format!("{}?text={}", intent_url, encode_uri_component(share_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(value: &str) -> Answer {
        Answer::from_query(Some(&format!("answer={}", encode_uri_component(value))))
    }

    #[test]
    fn first_line_quotes_the_answer() {
        let text = share_text(&answer("テスト"));
        assert_eq!(
            text.lines().next(),
            Some("私にとってのリライブパワーリストバンドは「テスト」！")
        );
    }

    #[test]
    fn empty_answer_leaves_the_slot_empty() {
        let text = share_text(&Answer::default());
        assert!(text.starts_with("私にとってのリライブパワーリストバンドは「」！\n\n"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with("#みんなでエンジン始動 #その動きエンジンがかかる"));
    }

    #[test]
    fn answer_is_substituted_verbatim() {
        let text = share_text(&answer("{answer} & <b>"));
        assert!(text.contains("「{answer} & <b>」"));
        assert_eq!(text.matches("https://x.gd/HapjS").count(), 1);
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b+c/d?e#f&g=h"), "a%20b%2Bc%2Fd%3Fe%23f%26g%3Dh");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("👉\n"), "%F0%9F%91%89%0A");
    }

    #[test]
    fn intent_link_carries_only_the_text() {
        let intent_url = Url::parse("https://x.com/intent/tweet").unwrap();
        let link = create_intent_link(&intent_url, "hi there\n#tag");
        assert_eq!(link, "https://x.com/intent/tweet?text=hi%20there%0A%23tag");
    }
}
