//! Reference extractor behaviour on realistic statute sentences.

use lexgraph_core::config::ExtractorConfig;
use lexgraph_core::{EdgeType, MomentLabel};
use lexgraph_extract::{CitationTier, ReferenceExtractor};
use proptest::prelude::*;

fn extractor() -> ReferenceExtractor {
    ReferenceExtractor::new(&ExtractorConfig::default()).unwrap()
}

fn pairs(text: &str) -> Vec<(u32, Option<u32>)> {
    extractor()
        .citations(text)
        .iter()
        .map(|c| (c.section, c.moment))
        .collect()
}

// ── Citation tiers ───────────────────────────────────────────────────────

#[test]
fn postpositional_exception_marks_moment_citation() {
    let ex = extractor();
    let text = "6 §:n 2 momentissa säädetyn estämättä";
    let extraction = ex.extract(text);
    assert_eq!(extraction.citations.len(), 1);
    let citation = &extraction.citations[0];
    assert_eq!((citation.section, citation.moment), (6, Some(2)));
    assert_eq!(citation.tier, CitationTier::SectionMoment);
    assert_eq!(extraction.relation_for(citation), EdgeType::Excepts);
    assert_eq!(extraction.exception_signal(citation), Some("estämättä"));
}

#[test]
fn repeated_bare_section_counted_once() {
    assert_eq!(pairs("6 § ja 6 § ja 6 §"), vec![(6, None)]);
}

#[test]
fn inflected_section_without_moment() {
    assert_eq!(pairs("siten kuin 14 §:ssä säädetään"), vec![(14, None)]);
}

#[test]
fn chapter_reference_yields_section() {
    assert_eq!(pairs("noudatetaan 3 luvun 12 § säännöksiä"), vec![(12, None)]);
}

#[test]
fn moment_and_section_citations_coexist_for_different_sections() {
    let found = pairs("Mitä 5 §:n 1 momentissa ja 7 §:ssä säädetään, koskee myös 9 §:ää.");
    assert_eq!(found, vec![(5, Some(1)), (7, None), (9, None)]);
}

#[test]
fn two_moments_of_one_section_are_both_kept() {
    let found = pairs("6 §:n 1 momentissa ja 6 §:n 2 momentissa tarkoitettu");
    assert_eq!(found, vec![(6, Some(1)), (6, Some(2))]);
}

#[test]
fn text_without_citations() {
    let ex = extractor();
    let extraction = ex.extract("Kunnan toimielimistä säädetään erikseen.");
    assert!(extraction.citations.is_empty());
    assert!(extraction.external_refs.is_empty());
    assert!(extraction.is_empty());
}

#[test]
fn overflowing_section_number_is_skipped() {
    assert!(pairs("99999999999999999999 §").is_empty());
}

// ── Exception context ────────────────────────────────────────────────────

#[test]
fn preceding_exception_signal() {
    let ex = extractor();
    let extraction = ex.extract("Poiketen siitä, mitä 8 §:ssä säädetään, valtuusto voi päättää");
    assert_eq!(extraction.relation_for(&extraction.citations[0]), EdgeType::Excepts);
}

#[test]
fn plain_reference_is_refers_to() {
    let ex = extractor();
    let extraction = ex.extract("Valtuusto valitsee 8 §:ssä tarkoitetut jäsenet.");
    assert_eq!(extraction.relation_for(&extraction.citations[0]), EdgeType::RefersTo);
}

#[test]
fn signal_outside_preceding_window_is_ignored() {
    let mut config = ExtractorConfig::default();
    config.exception_window = 10;
    config.exception_trailing_window = 0;
    let ex = ReferenceExtractor::new(&config).unwrap();
    let text = "Jollei toisin sovita, kaikki jäsenet valitaan 8 §:ssä tarkoitetulla tavalla.";
    let extraction = ex.extract(text);
    assert!(!extraction.is_exception_context(&extraction.citations[0]));
}

#[test]
fn trailing_window_stops_at_sentence_end() {
    let ex = extractor();
    let text = "Asiasta säädetään 6 §:ssä. Jollei 7 §:ssä toisin säädetä, noudatetaan tätä.";
    let extraction = ex.extract(text);
    let relations: Vec<_> = extraction
        .citations
        .iter()
        .map(|c| (c.section, extraction.relation_for(c)))
        .collect();
    assert_eq!(relations, vec![(6, EdgeType::RefersTo), (7, EdgeType::Excepts)]);
}

#[test]
fn clause_opener_after_citation_is_not_an_exception() {
    let ex = extractor();
    let text = "Valtuusto päättää 8 §:ssä tarkoitetuista asioista, jollei toisin säädetä.";
    let extraction = ex.extract(text);
    let citation = &extraction.citations[0];
    assert_eq!(extraction.exception_signal(citation), None);
    assert_eq!(extraction.relation_for(citation), EdgeType::RefersTo);
}

#[test]
fn trailing_signals_are_configured_separately() {
    let config = ExtractorConfig {
        postpositional_exception_signals: vec!["jollei".to_string()],
        ..ExtractorConfig::default()
    };
    let ex = ReferenceExtractor::new(&config).unwrap();
    let text = "Valtuusto päättää 8 §:ssä tarkoitetuista asioista, jollei toisin säädetä.";
    let extraction = ex.extract(text);
    assert_eq!(extraction.exception_signal(&extraction.citations[0]), Some("jollei"));
    let extraction = ex.extract("6 §:n 2 momentissa säädetyn estämättä");
    assert_eq!(extraction.relation_for(&extraction.citations[0]), EdgeType::RefersTo);
}

#[test]
fn injected_signal_list_replaces_defaults() {
    let config = ExtractorConfig {
        exception_signals: vec!["ohi".to_string()],
        ..ExtractorConfig::default()
    };
    let ex = ReferenceExtractor::new(&config).unwrap();
    let extraction = ex.extract("ohi sen mitä 4 §:ssä säädetään");
    assert!(extraction.is_exception_context(&extraction.citations[0]));
    let extraction = ex.extract("estämättä 4 §:ssä säädetyn");
    assert!(!extraction.is_exception_context(&extraction.citations[0]));
}

// ── Definitions ──────────────────────────────────────────────────────────

#[test]
fn definition_phrase_anywhere_in_text() {
    let ex = extractor();
    let extraction = ex.extract("Kunnalla tarkoitetaan tässä laissa kuntaa ja kuntayhtymää.");
    assert!(extraction.is_definition_context());
    assert_eq!(extraction.definition_signal(), Some("tarkoitetaan"));
}

#[test]
fn no_definition_phrase() {
    let ex = extractor();
    assert!(!ex.is_definition_context("Valtuusto päättää talousarviosta."));
}

// ── External statutes ────────────────────────────────────────────────────

#[test]
fn explicit_and_named_external_laws() {
    let ex = extractor();
    let extraction = ex.extract(
        "Tilinpäätös laaditaan kirjanpitolain (1336/1997) mukaisesti ja tarkastetaan osakeyhtiölain säännösten mukaan.",
    );
    let ids: Vec<_> = extraction.external_refs.iter().map(|r| r.law_id.as_str()).collect();
    assert_eq!(ids, vec!["1336/1997", "624/2006"]);
}

#[test]
fn external_law_reported_once() {
    let ex = extractor();
    let extraction = ex.extract("kirjanpitolain (1336/1997) 6 § ja kirjanpitolakia sovelletaan");
    assert_eq!(extraction.external_refs.len(), 1);
}

// ── Self-citation helper ─────────────────────────────────────────────────

#[test]
fn self_citation_detection() {
    let ex = extractor();
    let citations = ex.citations("6 §:n 2 momentissa ja 6 §:ssä");
    let own = MomentLabel::Number(2);
    assert!(citations[0].is_self_citation(6, &own));
    assert!(!citations[0].is_self_citation(6, &MomentLabel::Number(1)));
    assert!(!citations[0].is_self_citation(7, &own));
}

#[test]
fn matcher_order_is_most_specific_first() {
    assert_eq!(
        extractor().matcher_names(),
        vec!["section_moment", "section_case", "chapter_section", "bare_section"]
    );
}

// ── Properties ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,200}") {
        let ex = extractor();
        let extraction = ex.extract(&text);
        for citation in &extraction.citations {
            let _ = extraction.relation_for(citation);
        }
    }

    #[test]
    fn sections_without_moment_are_unique(
        sections in prop::collection::vec(1u32..60, 1..12),
    ) {
        let text = sections
            .iter()
            .map(|s| format!("{s} §"))
            .collect::<Vec<_>>()
            .join(" ja ");
        let found = pairs(&text);
        let mut seen = std::collections::HashSet::new();
        for (section, moment) in &found {
            prop_assert!(moment.is_none());
            prop_assert!(seen.insert(*section));
        }
        let distinct: std::collections::HashSet<_> = sections.iter().copied().collect();
        prop_assert_eq!(seen, distinct);
    }
}
