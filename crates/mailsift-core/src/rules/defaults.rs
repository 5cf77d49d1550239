//! Bootstrap classification rules.

use super::model::FolderRule;

/// The bootstrap rule set: one rule per common folder family, pre-populated
/// with representative keywords and sender domains.
///
/// Folder names follow the German folder layout of the stock MailSift
/// client; hosts with different folder trees supply their own rules via
/// [`RuleStore::new`](super::RuleStore::new) or
/// [`RuleStore::from_json`](super::RuleStore::from_json).
#[must_use]
pub fn default_rules() -> Vec<FolderRule> {
    vec![
        FolderRule::new(
            "Finanzen",
            &["rechnung", "invoice", "zahlung", "payment", "beleg", "receipt", "konto", "bank"],
            &[],
            &["paypal", "amazon", "stripe", "bank"],
            90,
        ),
        FolderRule::new(
            "Arbeit",
            &["meeting", "projekt", "project", "deadline", "aufgabe", "task", "bericht", "report", "kollege"],
            &[],
            &["company", "corp", "office"],
            80,
        ),
        FolderRule::new(
            "Entwicklung",
            &["github", "gitlab", "commit", "pull request", "merge", "bug", "feature", "code"],
            &[],
            &["github.com", "gitlab.com", "bitbucket.org"],
            85,
        ),
        FolderRule::new(
            "Newsletter",
            &["newsletter", "abmelden", "unsubscribe", "update", "neuigkeiten", "digest"],
            &[],
            &["mailchimp", "sendgrid", "newsletter"],
            50,
        ),
        FolderRule::new(
            "Privat",
            &["familie", "freund", "einladung", "urlaub", "geburtstag", "feiern"],
            &[],
            &[],
            60,
        ),
        FolderRule::new(
            "Spam",
            &["gewinn", "gratis", "kostenlos", "limitiert", "aktionscode", "klicken sie hier"],
            &[],
            &[],
            95,
        ),
        FolderRule::new(
            "Reisen",
            &["buchung", "booking", "flug", "flight", "hotel", "reservation", "reise", "trip"],
            &[],
            &["booking.com", "airbnb", "lufthansa", "airlines"],
            75,
        ),
        FolderRule::new(
            "Shopping",
            &["bestellung", "order", "lieferung", "delivery", "versand", "shipping", "kauf", "purchase"],
            &[],
            &["amazon", "ebay", "otto", "zalando"],
            70,
        ),
    ]
}
