//! Per-folder scoring.

use super::model::FolderScore;
use crate::message::MessageContent;
use crate::rules::{FolderRule, RuleStore};

/// Maximum total score for a single folder.
pub(crate) const MAX_SCORE: u32 = 100;
/// Cap on the keyword contribution.
const KEYWORD_CAP: u32 = 40;
/// Score added per matched keyword, up to [`KEYWORD_CAP`].
const KEYWORD_WEIGHT: u32 = 15;
/// Contribution for a known-sender match.
const SENDER_WEIGHT: u32 = 25;
/// Contribution for a known-domain match.
const DOMAIN_WEIGHT: u32 = 30;
/// Contribution when the folder name itself occurs in the message text.
const NAME_MENTION_WEIGHT: u32 = 20;
/// Scores below this collapse to the Inbox fallback.
const FALLBACK_FLOOR: u32 = 15;
/// Folder substituted when no signal is strong enough.
const FALLBACK_FOLDER: &str = "Inbox";
/// Score reported for the Inbox fallback.
const FALLBACK_SCORE: u32 = 30;
/// Matched keywords listed in the reason string.
const REASON_KEYWORDS: usize = 3;
/// Reason reported when a rule matched but no signal fired.
const GENERIC_REASON: &str = "General classification";
/// Reason reported for the Inbox fallback.
const FALLBACK_REASON: &str = "No strong classification signals";

/// Scores one candidate folder against a message.
///
/// Total over well-formed input; never fails. A candidate scoring below
/// the floor is replaced wholesale by the `"Inbox"` fallback entry, so the
/// ranked list always contains a safe target. The substitution happens per
/// candidate, so several low-scoring candidates all surface as `"Inbox"`.
#[must_use]
pub fn score_folder(rules: &RuleStore, folder: &str, content: &MessageContent) -> FolderScore {
    let text = content.normalized_text();
    let (score, reason) = match rules.find(folder) {
        Some(rule) => rule_score(rule, &text, content),
        None => name_mention_score(folder, &text),
    };

    if score < FALLBACK_FLOOR {
        return FolderScore {
            folder: FALLBACK_FOLDER.to_string(),
            score: FALLBACK_SCORE,
            reason: FALLBACK_REASON.to_string(),
        };
    }

    FolderScore {
        folder: folder.to_string(),
        score: score.min(MAX_SCORE),
        reason,
    }
}

/// Sums a rule's contributions and builds the reason string.
///
/// Each signal is additive: matched keywords (capped), known sender, known
/// domain, and a tenth of the rule priority.
#[allow(clippy::cast_possible_truncation)]
fn rule_score(rule: &FolderRule, text: &str, content: &MessageContent) -> (u32, String) {
    let mut score = 0;
    let mut reasons: Vec<String> = Vec::new();

    let matched: Vec<&str> = rule
        .keywords
        .iter()
        .filter(|keyword| text.contains(keyword.as_str()))
        .map(String::as_str)
        .collect();
    if !matched.is_empty() {
        score += (matched.len() as u32 * KEYWORD_WEIGHT).min(KEYWORD_CAP);
        let listed = &matched[..matched.len().min(REASON_KEYWORDS)];
        reasons.push(format!("Keywords: {}", listed.join(", ")));
    }

    let sender = content.from.to_lowercase();
    if rule.senders.iter().any(|s| sender.contains(s.as_str())) {
        score += SENDER_WEIGHT;
        reasons.push("Known sender".to_string());
    }

    let domain = content.sender_domain();
    if rule.domains.iter().any(|d| domain.contains(d.as_str())) {
        score += DOMAIN_WEIGHT;
        reasons.push("Known domain".to_string());
    }

    score += u32::from(rule.priority / 10);

    let reason = if reasons.is_empty() {
        GENERIC_REASON.to_string()
    } else {
        reasons.join("; ")
    };
    (score, reason)
}

/// Score for a folder without a rule: credit when the folder name itself
/// appears in the message text.
fn name_mention_score(folder: &str, text: &str) -> (u32, String) {
    if text.contains(&folder.to_lowercase()) {
        (NAME_MENTION_WEIGHT, "Folder name mentioned".to_string())
    } else {
        (0, FALLBACK_REASON.to_string())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::rules::default_rules;

    fn content(subject: &str, body: &str, from: &str) -> MessageContent {
        MessageContent::new(subject, body, from)
    }

    #[test]
    fn test_keyword_contribution_caps_at_forty() {
        let rules = RuleStore::with_defaults();
        // Four Finanzen keywords match: 4 × 15 capped to 40, plus domain
        // 30 and priority 9.
        let result = score_folder(
            &rules,
            "Finanzen",
            &content("Rechnung und Beleg", "zahlung per invoice", "x@bank.de"),
        );
        assert_eq!(result.score, 79);
        assert!(result.reason.starts_with("Keywords: rechnung, invoice, zahlung"));
        assert!(result.reason.contains("Known domain"));
    }

    #[test]
    fn test_sender_contribution() {
        let rules = RuleStore::new(vec![FolderRule::new(
            "VIP",
            &[],
            &["boss@corp.com"],
            &[],
            50,
        )]);
        let result = score_folder(&rules, "VIP", &content("hello", "", "Boss@corp.com"));
        // Sender 25 plus priority 5.
        assert_eq!(result.score, 30);
        assert_eq!(result.reason, "Known sender");
    }

    #[test]
    fn test_domain_contribution() {
        let rules = RuleStore::with_defaults();
        let result = score_folder(&rules, "Entwicklung", &content("", "", "ci@github.com"));
        // Domain 30 plus priority 8.
        assert_eq!(result.score, 38);
        assert_eq!(result.reason, "Known domain");
    }

    #[test]
    fn test_priority_contribution_uses_integer_floor() {
        let rules = RuleStore::new(vec![FolderRule::new("Spam", &[], &[], &["evil"], 95)]);
        let result = score_folder(&rules, "Spam", &content("", "", "x@evil.org"));
        // Domain 30 plus floor(95 / 10) = 9, not 9.5.
        assert_eq!(result.score, 39);
    }

    #[test]
    fn test_folder_name_mention_without_rule() {
        let rules = RuleStore::new(Vec::new());
        let result = score_folder(
            &rules,
            "Receipts",
            &content("Your receipts for May", "", "a@b.com"),
        );
        assert_eq!(result.folder, "Receipts");
        assert_eq!(result.score, 20);
        assert_eq!(result.reason, "Folder name mentioned");
    }

    #[test]
    fn test_low_score_collapses_to_inbox() {
        let rules = RuleStore::with_defaults();
        // No keyword, sender, or domain matches; priority alone (8) stays
        // under the floor.
        let result = score_folder(&rules, "Arbeit", &content("hallo", "wie gehts", "x@web.de"));
        assert_eq!(result.folder, "Inbox");
        assert_eq!(result.score, 30);
        assert_eq!(result.reason, "No strong classification signals");
    }

    #[test]
    fn test_single_keyword_plus_priority() {
        let rules = RuleStore::new(vec![FolderRule::new("Archive", &["dossier"], &[], &[], 100)]);
        let result = score_folder(&rules, "Archive", &content("dossier", "", "x@y.z"));
        assert_eq!(result.score, 25);
        assert_eq!(result.reason, "Keywords: dossier");
    }

    #[test]
    fn test_score_clamps_at_one_hundred() {
        let rules = RuleStore::new(vec![FolderRule::new(
            "Everything",
            &["alpha", "beta", "gamma"],
            &["sender@match.com"],
            &["match.com"],
            100,
        )]);
        let result = score_folder(
            &rules,
            "Everything",
            &content("alpha beta", "gamma", "sender@match.com"),
        );
        // 40 + 25 + 30 + 10 would be 105.
        assert_eq!(result.score, 100);
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded(
            subject in "[a-z ]{0,40}",
            body in "[a-z ]{0,200}",
            folder in "[A-Za-z]{1,12}",
        ) {
            let rules = RuleStore::with_defaults();
            let result = score_folder(&rules, &folder, &content(&subject, &body, "someone@example.com"));
            prop_assert!(result.score <= 100);
            prop_assert!(
                result.folder == folder || (result.folder == "Inbox" && result.score == 30)
            );
        }

        #[test]
        fn prop_adding_a_keyword_never_lowers_the_rule_score(
            body in "[a-z ]{0,120}",
            rule_idx in 0usize..8,
            keyword_idx in 0usize..6,
        ) {
            let rules = default_rules();
            let rule = &rules[rule_idx];
            let keyword = rule.keywords[keyword_idx].clone();

            let base = content("", &body, "x@example.com");
            let augmented = content("", &format!("{body} {keyword}"), "x@example.com");

            let (base_score, _) = rule_score(rule, &base.normalized_text(), &base);
            let (augmented_score, _) = rule_score(rule, &augmented.normalized_text(), &augmented);
            prop_assert!(augmented_score >= base_score);
        }
    }
}
