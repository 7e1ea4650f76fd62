//! Integration tests driving selectors the way a transformation pipeline does.
//!
//! These tests verify the end-to-end flow:
//! - Configuration tokens parse into selectors and validate
//! - A scan over a method body's access sites picks the right occurrences,
//!   with one ordinal counter per distinct member
//! - The wildcard widens a selection from the first occurrence to all of them
//! - Non-member sites never reach a selection

use std::collections::HashMap;

use membersel::{AccessSite, Error, MemberSelector};

/// Walk a scanned body in order, tracking one ordinal counter per distinct
/// member, and return the indices the selector picks.
fn select_indices(selector: &MemberSelector, body: &[AccessSite]) -> Vec<usize> {
    let mut seen: HashMap<(String, String, String), usize> = HashMap::new();
    let mut selected = Vec::new();

    for (index, site) in body.iter().enumerate() {
        if !site.is_member() {
            continue;
        }
        let key = (
            site.owner().unwrap_or_default().to_string(),
            site.name().unwrap_or_default().to_string(),
            site.desc().unwrap_or_default().to_string(),
        );
        let ordinal = seen.entry(key).or_insert(0);
        if selector.matches_site_at(site, *ordinal) {
            selected.push(index);
        }
        *ordinal += 1;
    }

    selected
}

/// A small scanned method body: three calls to the same target, a field
/// read, a type allocation, a dynamic call, and a call on another owner.
fn scanned_body() -> Vec<AccessSite> {
    vec![
        AccessSite::method_call("game/Entity", "update", "(J)V"), // 0
        AccessSite::field_access("game/Entity", "health", "I"),   // 1
        AccessSite::type_use("game/Particle"),                    // 2
        AccessSite::method_call("game/Entity", "update", "(J)V"), // 3
        AccessSite::dynamic_call("run", "()Ljava/lang/Runnable;"), // 4
        AccessSite::method_call("game/World", "update", "(J)V"),  // 5
        AccessSite::method_call("game/Entity", "update", "(J)V"), // 6
    ]
}

#[test]
fn test_strict_selector_picks_first_occurrence_only() {
    let body = scanned_body();
    let selector = MemberSelector::parse("Lgame/Entity;update(J)V");

    assert_eq!(select_indices(&selector, &body), vec![0]);
}

#[test]
fn test_wildcard_selector_picks_every_occurrence() {
    let body = scanned_body();
    let selector = MemberSelector::parse("Lgame/Entity;update*(J)V");

    assert_eq!(select_indices(&selector, &body), vec![0, 3, 6]);
}

#[test]
fn test_bare_name_spans_owners_with_one_ordinal_per_member() {
    let body = scanned_body();

    // Each owner's update is a distinct member with its own counter, so a
    // strict bare-name selector picks the first occurrence of each
    let strict = MemberSelector::parse("update");
    assert_eq!(select_indices(&strict, &body), vec![0, 5]);

    let all = MemberSelector::parse("update*");
    assert_eq!(select_indices(&all, &body), vec![0, 3, 5, 6]);
}

#[test]
fn test_dotted_and_internal_tokens_agree() {
    let dotted = MemberSelector::parse("game.Entity.update");
    let internal = MemberSelector::parse("Lgame/Entity;update");

    assert_eq!(dotted, internal);
    assert_eq!(dotted.owner(), Some("game/Entity"));

    // Equivalence holds with descriptors in play as well
    assert_eq!(
        MemberSelector::parse("game.Entity.update(III)Z"),
        MemberSelector::parse("Lgame/Entity;update(III)Z")
    );

    let body = scanned_body();
    assert_eq!(
        select_indices(&dotted, &body),
        select_indices(&internal, &body)
    );
}

#[test]
fn test_match_everything_still_skips_non_member_sites() {
    let body = scanned_body();
    let everything = MemberSelector::parse("*");

    // Indices 2 (type use) and 4 (dynamic call) carry no member
    assert_eq!(select_indices(&everything, &body), vec![0, 1, 3, 5, 6]);
}

#[test]
fn test_field_selectors_discriminate_by_descriptor() {
    let body = scanned_body();

    assert_eq!(
        select_indices(&MemberSelector::parse("health:I"), &body),
        vec![1]
    );
    assert_eq!(
        select_indices(&MemberSelector::parse("health:J"), &body),
        Vec::<usize>::new()
    );

    // Without a descriptor the name alone decides
    assert_eq!(
        select_indices(&MemberSelector::parse("health"), &body),
        vec![1]
    );
}

#[test]
fn test_selector_derived_from_site_matches_its_origin() {
    let body = scanned_body();

    let selector = MemberSelector::try_from(&body[0]).unwrap();
    assert!(selector.is_fully_qualified());
    assert!(!selector.match_all());
    assert_eq!(select_indices(&selector, &body), vec![0]);

    // Deriving from a non-member site is a reportable mistake
    match MemberSelector::try_from(&body[2]) {
        Err(Error::NotMemberAccess(kind)) => assert_eq!(kind.to_string(), "type use"),
        other => panic!("expected a non-member rejection, got {:?}", other),
    }
}

#[test]
fn test_configuration_tokens_validate() {
    let good = [
        "Lgame/Entity;update(J)V",
        "game.Entity.update",
        "health:I",
        "Lgame/Entity;<init>(Lgame/World;)V",
        "update*",
        "*",
    ];
    for token in good {
        let selector = MemberSelector::parse(token);
        assert!(selector.validate().is_ok(), "{} should validate", token);
    }

    // A descriptor that violates the grammar carries its cause
    let selector = MemberSelector::parse("Lgame/Entity;update(Q)V");
    match selector.validate() {
        Err(Error::InvalidSelector { source, .. }) => assert!(source.is_some()),
        other => panic!("expected a selector rejection, got {:?}", other),
    }

    // Owners and names are checked structurally
    assert!(MemberSelector::parse("Lgame//Entity;update").validate().is_err());
    assert!(MemberSelector::parse("upd<ate").validate().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_selectors_round_trip_through_json() {
    let tokens = ["La/b/C;foo(I)V", "a.b.C.foo", "health:I", "update*"];
    let selectors: Vec<MemberSelector> =
        tokens.iter().map(|token| MemberSelector::parse(token)).collect();

    let json = serde_json::to_string(&selectors).unwrap();
    // Selectors serialize as their token text, with dotted owners normalized
    assert_eq!(
        json,
        r#"["La/b/C;foo(I)V","La/b/C;foo","health:I","update*"]"#
    );

    let back: Vec<MemberSelector> = serde_json::from_str(&json).unwrap();
    assert_eq!(selectors, back);
}
