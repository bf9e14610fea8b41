//! Fact handlers — one lookup/format routine per question topic
//!
//! Every handler is a pure function of (certificate identifier, store) →
//! display text, sharing one contract:
//!
//! 1. no identifier supplied → fixed prompt asking which certificate;
//! 2. identifier unknown → fixed "no information" message naming it;
//! 3. topic field(s) probed in priority order, none present → fixed
//!    "not available" message;
//! 4. otherwise a deterministic line-oriented rendering (see
//!    [`render`]).
//!
//! None of these branches is an error: the host runtime always gets a
//! well-formed reply. The only non-text operation is [`reset`], which emits a
//! state event telling the host to clear its tracked certificate slot.

pub mod render;

mod catalog;
mod documents;
mod eligibility;
mod fees;
mod overview;
mod process;

pub use catalog::{license_types, passport_tatkal_info, passport_types, ration_card_types};
pub use documents::documents_list;
pub use eligibility::check_eligibility;
pub use fees::cost_info;
pub use overview::{certificate_info, issuing_authority, validity_info};
pub use process::{application_process, duplicate_info, online_application, processing_time};

use crate::knowledge::KnowledgeStore;

/// Identifier variants the fixed passport handlers accept.
pub(crate) const PASSPORT_KEYS: &[&str] = &["passport", "passports"];

/// Whether an identifier names the passport record.
pub(crate) fn is_passport(identifier: &str) -> bool {
    PASSPORT_KEYS.contains(&identifier.to_lowercase().as_str())
}

/// Whether an identifier names the driving-license record.
pub(crate) fn is_driving_license(identifier: &str) -> bool {
    matches!(
        identifier.to_lowercase().as_str(),
        "driving license" | "driving_license"
    )
}

/// Question topics the host dialogue runtime can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Overview,
    ApplicationProcess,
    Documents,
    Cost,
    TatkalPassport,
    LicenseTypes,
    Duplicate,
    IssuingAuthority,
    Eligibility,
    PassportTypes,
    OnlineApplication,
    ProcessingTime,
    RationCardTypes,
    Validity,
    Reset,
}

impl Topic {
    /// All topics in routing order.
    pub const ALL: [Self; 15] = [
        Self::Overview,
        Self::ApplicationProcess,
        Self::Documents,
        Self::Cost,
        Self::TatkalPassport,
        Self::LicenseTypes,
        Self::Duplicate,
        Self::IssuingAuthority,
        Self::Eligibility,
        Self::PassportTypes,
        Self::OnlineApplication,
        Self::ProcessingTime,
        Self::RationCardTypes,
        Self::Validity,
        Self::Reset,
    ];

    /// Stable kebab-case name, used by the CLI and by host routing tables.
    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::ApplicationProcess => "application-process",
            Self::Documents => "documents",
            Self::Cost => "cost",
            Self::TatkalPassport => "tatkal-passport",
            Self::LicenseTypes => "license-types",
            Self::Duplicate => "duplicate",
            Self::IssuingAuthority => "issuing-authority",
            Self::Eligibility => "eligibility",
            Self::PassportTypes => "passport-types",
            Self::OnlineApplication => "online-application",
            Self::ProcessingTime => "processing-time",
            Self::RationCardTypes => "ration-card-types",
            Self::Validity => "validity",
            Self::Reset => "reset",
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.name()).collect();
                format!("unknown topic '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Instruction for the host dialogue runtime's tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// Clear the tracked "current certificate" slot.
    ClearCertificate,
}

/// What one handler invocation hands back to the host: rendered display
/// text, state-update instructions, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub text: Option<String>,
    pub events: Vec<StateEvent>,
}

impl HandlerResponse {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            events: Vec::new(),
        }
    }
}

/// Clear the host-tracked certificate context. No display text, no other
/// side effect.
pub fn reset() -> HandlerResponse {
    HandlerResponse {
        text: None,
        events: vec![StateEvent::ClearCertificate],
    }
}

/// Route one invocation to its topic handler.
///
/// This is the single seam the host runtime (and the CLI) drive; the
/// individual handlers stay directly callable for tests.
pub fn dispatch(
    topic: Topic,
    certificate: Option<&str>,
    store: &KnowledgeStore,
) -> HandlerResponse {
    match topic {
        Topic::Overview => HandlerResponse::text(certificate_info(store, certificate)),
        Topic::ApplicationProcess => {
            HandlerResponse::text(application_process(store, certificate))
        }
        Topic::Documents => HandlerResponse::text(documents_list(store, certificate)),
        Topic::Cost => HandlerResponse::text(cost_info(store, certificate)),
        Topic::TatkalPassport => HandlerResponse::text(passport_tatkal_info(store)),
        Topic::LicenseTypes => HandlerResponse::text(license_types(store)),
        Topic::Duplicate => HandlerResponse::text(duplicate_info(store, certificate)),
        Topic::IssuingAuthority => HandlerResponse::text(issuing_authority(store, certificate)),
        Topic::Eligibility => HandlerResponse::text(check_eligibility(store, certificate)),
        Topic::PassportTypes => HandlerResponse::text(passport_types(store)),
        Topic::OnlineApplication => {
            HandlerResponse::text(online_application(store, certificate))
        }
        Topic::ProcessingTime => HandlerResponse::text(processing_time(store, certificate)),
        Topic::RationCardTypes => HandlerResponse::text(ration_card_types(store)),
        Topic::Validity => HandlerResponse::text(validity_info(store, certificate)),
        Topic::Reset => reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_certificate_and_says_nothing() {
        let response = reset();
        assert_eq!(response.text, None);
        assert_eq!(response.events, vec![StateEvent::ClearCertificate]);
    }

    #[test]
    fn dispatch_reset_routes_to_reset() {
        let store = KnowledgeStore::empty();
        let response = dispatch(Topic::Reset, None, &store);
        assert_eq!(response.events, vec![StateEvent::ClearCertificate]);
    }

    #[test]
    fn topic_names_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(topic.name().parse::<Topic>().unwrap(), topic);
        }
        assert!("no-such-topic".parse::<Topic>().is_err());
    }

    #[test]
    fn fact_topics_always_produce_text() {
        let store = KnowledgeStore::empty();
        for topic in Topic::ALL {
            if topic == Topic::Reset {
                continue;
            }
            let response = dispatch(topic, None, &store);
            assert!(response.text.is_some(), "{topic:?} produced no text");
            assert!(response.events.is_empty());
        }
    }
}
