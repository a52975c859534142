//! Integration tests for QR token issue and verification.
//!
//! Drives the public API end to end: the embedded sample roster, the token
//! generator, and the verify handler, for both digest tiers.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use digital_id::adapters::{sample_members, InMemoryRoster};
use digital_id::application::{GenerateTokenHandler, GenerateTokenQuery, VerifyTokenCommand, VerifyTokenHandler};
use digital_id::domain::foundation::{ErrorCode, MemberId};
use digital_id::domain::member::Member;
use digital_id::domain::verification::{
    DigestPreference, DigestTier, TokenGenerator, TokenVerifier, VerificationToken,
};

const SECRET: &str = "SEDS_CUSAT_2024_SECRET_KEY";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    generator: Arc<TokenGenerator>,
    issue: GenerateTokenHandler,
    verify: VerifyTokenHandler,
}

fn fixture(tier: DigestTier) -> Fixture {
    let roster = Arc::new(InMemoryRoster::from_members(sample_members()).unwrap());
    let generator = Arc::new(TokenGenerator::new(SECRET, tier));
    Fixture {
        issue: GenerateTokenHandler::new(roster.clone(), generator.clone()),
        verify: VerifyTokenHandler::new(roster, TokenVerifier::new(generator.clone())),
        generator,
    }
}

fn john() -> Member {
    sample_members().remove(0)
}

async fn issue(f: &Fixture, id: &str) -> VerificationToken {
    f.issue
        .handle(GenerateTokenQuery {
            member_id: MemberId::new(id).unwrap(),
        })
        .await
        .unwrap()
}

// =============================================================================
// Round trips
// =============================================================================

#[tokio::test]
async fn every_member_round_trips_on_both_tiers() {
    for tier in [DigestTier::Secure, DigestTier::Fallback] {
        let f = fixture(tier);
        for member in sample_members() {
            let token = issue(&f, member.id.as_str()).await;
            let result = f.verify.handle(VerifyTokenCommand::new(token.to_payload())).await;
            assert!(result.success, "{} on {} tier", member.id, tier);
            assert_eq!(result.member(), Some(&member));
        }
    }
}

#[tokio::test]
async fn sample_digests_are_distinct() {
    for tier in [DigestTier::Secure, DigestTier::Fallback] {
        let f = fixture(tier);
        let mut seen = HashSet::new();
        for member in sample_members() {
            assert!(seen.insert(issue(&f, member.id.as_str()).await.hash));
        }
        assert_eq!(seen.len(), 5);
    }
}

#[tokio::test]
async fn reference_member_digest_is_stable() {
    let token = issue(&fixture(DigestTier::Secure), "SEDS2024001").await;
    assert_eq!(
        token.hash,
        "ebd858b4b2b89ae7f447387578bcf56fb2cf82873359a02506df01965551b063"
    );
    assert_eq!(token.member_info.role, "Core Team");

    let token = issue(&fixture(DigestTier::Fallback), "SEDS2024001").await;
    assert_eq!(token.hash, "26d3def9");
}

#[tokio::test]
async fn payload_with_extra_fields_and_whitespace_verifies() {
    let f = fixture(DigestTier::Secure);
    let token = issue(&f, "SEDS2024004").await;
    let payload = format!(
        "  {{\"hash\":\"{}\",\"memberInfo\":{{\"name\":\"Sarah Wilson\",\"id\":\"SEDS2024004\",\"role\":\"Content Team\",\"batch\":\"2023\",\"extra\":1}},\"v\":2}}\n",
        token.hash
    );
    assert!(f.verify.handle(VerifyTokenCommand::new(payload)).await.success);
}

// =============================================================================
// Tampering
// =============================================================================

#[tokio::test]
async fn changing_any_hashed_field_breaks_the_reference_digest() {
    let f = fixture(DigestTier::Secure);
    let genuine = f.generator.digest_for(&john());

    let mut renamed = john();
    renamed.name = "John Doe ".to_string();
    let mut promoted = john();
    promoted.role = "Tech Team".to_string();
    let mut moved = john();
    moved.id = MemberId::new("SEDS2024002").unwrap();

    for variant in [renamed, promoted, moved] {
        assert_ne!(f.generator.digest_for(&variant), genuine);
    }

    let other_secret = TokenGenerator::new("SEDS_CUSAT_2025_SECRET_KEY", DigestTier::Secure);
    assert_ne!(other_secret.digest_for(&john()), genuine);
}

#[tokio::test]
async fn batch_is_not_bound_by_the_digest() {
    let f = fixture(DigestTier::Secure);
    let mut token = issue(&f, "SEDS2024001").await;
    token.member_info.batch = "1999".to_string();

    let result = f.verify.handle(VerifyTokenCommand::new(token.to_payload())).await;
    assert!(result.success);
    assert_eq!(result.member().unwrap().batch, "2024");
}

#[tokio::test]
async fn forged_token_for_another_member_is_rejected() {
    let f = fixture(DigestTier::Secure);
    let forger = TokenGenerator::new("guessed-secret", DigestTier::Secure);
    let forged = forger.generate(&john());

    let result = f.verify.handle(VerifyTokenCommand::new(forged.to_payload())).await;
    assert_eq!(result.error_code(), Some(ErrorCode::DigestMismatch));
}

#[tokio::test]
async fn secure_preference_without_context_is_unavailable() {
    let err = DigestPreference::Secure.resolve(false).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DigestUnavailable);
    assert_eq!(DigestPreference::Auto.resolve(false).unwrap(), DigestTier::Fallback);
    assert_eq!(DigestPreference::Auto.resolve(true).unwrap(), DigestTier::Secure);
    assert_eq!(DigestPreference::Fallback.resolve(true).unwrap(), DigestTier::Fallback);
}

// =============================================================================
// Properties
// =============================================================================

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().build().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_idempotent(name in ".{0,40}", role in ".{0,20}", secret in ".{0,32}") {
        let mut member = john();
        member.name = name;
        member.role = role;

        for tier in [DigestTier::Secure, DigestTier::Fallback] {
            let generator = TokenGenerator::new(secret.clone(), tier);
            prop_assert_eq!(generator.generate(&member), generator.generate(&member));
        }
    }

    #[test]
    fn altered_hash_never_verifies(idx in 0usize..5, pos in 0usize..64, replacement in "[0-9a-f]") {
        let f = fixture(DigestTier::Secure);
        let member = sample_members().remove(idx);
        let mut token = f.generator.generate(&member);

        let mut chars: Vec<char> = token.hash.chars().collect();
        prop_assume!(chars[pos].to_string() != replacement);
        chars[pos] = replacement.chars().next().unwrap();
        token.hash = chars.into_iter().collect();

        let result = runtime().block_on(f.verify.handle(VerifyTokenCommand::new(token.to_payload())));
        prop_assert!(!result.success);
        prop_assert_eq!(result.error_code(), Some(ErrorCode::DigestMismatch));
    }

    #[test]
    fn swapped_member_id_never_verifies(from in 0usize..5, to in 0usize..5, tier_secure in any::<bool>()) {
        prop_assume!(from != to);
        let tier = if tier_secure { DigestTier::Secure } else { DigestTier::Fallback };
        let f = fixture(tier);
        let members = sample_members();

        let mut token = f.generator.generate(&members[from]);
        token.member_info.id = members[to].id.to_string();

        let result = runtime().block_on(f.verify.handle(VerifyTokenCommand::new(token.to_payload())));
        prop_assert!(!result.success);
    }

    #[test]
    fn single_char_change_in_member_id_never_verifies(
        idx in 0usize..5,
        pos in 0usize..64,
        replacement in "[A-Za-z0-9_-]",
        tier_secure in any::<bool>(),
    ) {
        let tier = if tier_secure { DigestTier::Secure } else { DigestTier::Fallback };
        let f = fixture(tier);
        let member = sample_members().remove(idx);
        let mut token = f.generator.generate(&member);

        let mut chars: Vec<char> = token.member_info.id.chars().collect();
        let pos = pos % chars.len();
        prop_assume!(chars[pos].to_string() != replacement);
        chars[pos] = replacement.chars().next().unwrap();
        token.member_info.id = chars.into_iter().collect();

        let result = runtime().block_on(f.verify.handle(VerifyTokenCommand::new(token.to_payload())));
        prop_assert!(!result.success);
        prop_assert!(matches!(
            result.error_code(),
            Some(ErrorCode::MemberNotFound) | Some(ErrorCode::DigestMismatch)
        ));
    }

    #[test]
    fn arbitrary_input_never_panics(payload in ".{0,200}") {
        let f = fixture(DigestTier::Secure);
        let result = runtime().block_on(f.verify.handle(VerifyTokenCommand::new(payload)));
        prop_assert!(!result.success);
        prop_assert!(result.error_code().is_some());
    }
}
