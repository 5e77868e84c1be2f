//! Email validation and placeholder synthesis.
//!
//! The destination schema requires a non-null, unique-ish email, but a
//! missing or broken address must never block an otherwise-valid person.
//! Invalid input is therefore replaced with a clearly synthetic,
//! non-deliverable placeholder and the record is annotated.

use uuid::Uuid;

use kerigma_ingest::text::slugify;

/// Reserved domain for synthesized addresses; never resolvable.
const PLACEHOLDER_DOMAIN: &str = "noemail.kerigma.local";

/// Annotation appended to `observacoes` when an address is synthesized.
pub const GENERATED_EMAIL_NOTE: &str = "Email gerado automaticamente na importação";

/// Minimal deliverability shape check: `local@host.tld`.
///
/// Deliberately not an RFC 5321 parser — the goal is to catch cells that
/// are obviously not addresses (phone numbers, dashes, notes), not to
/// arbitrate exotic but legal mailboxes.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Synthesizes a unique placeholder address for a person without one.
///
/// Shape: `<slug>+<8-hex>@noemail.kerigma.local`. The random suffix keeps
/// two homonyms from colliding on the store's unique-email constraint.
pub fn placeholder_email(name: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}+{}@{}", slugify(name), &suffix[..8], PLACEHOLDER_DOMAIN)
}
