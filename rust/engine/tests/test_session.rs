use boardrank_engine::cards::{parse_cards, Card, HoleCombination};
use boardrank_engine::deck::seeded_rng;
use boardrank_engine::errors::AnalysisError;
use boardrank_engine::session::HandSession;
use boardrank_engine::strength::{Scoring, StreetDivisors};
use boardrank_engine::tiers::Street;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn session(hole: &str) -> HandSession {
    HandSession::new(HoleCombination::from_slice(&parse_cards(hole).unwrap()).unwrap()).unwrap()
}

#[test]
fn every_street_is_recomputed_from_scratch() {
    init_logs();
    let mut s = session("Ah Kh");
    s.deal_flop([card("Qh"), card("7c"), card("2d")]).unwrap();
    let flop = s.analyze(&Scoring::default()).unwrap();
    assert_eq!(flop.street, Street::Flop);
    assert_eq!(flop.entries().len(), 1082);

    assert_eq!(s.reveal(card("Jh")), Ok(Street::Turn));
    let turn = s.analyze(&Scoring::default()).unwrap();
    assert_eq!(turn.entries().len(), 1036);

    assert_eq!(s.reveal(card("Th")), Ok(Street::River));
    let river = s.analyze(&Scoring::default()).unwrap();
    assert_eq!(river.entries().len(), 991);
    assert_eq!(river.reference().tier, 1);
    assert_eq!(river.reference().cards_used, 2);
}

#[test]
fn revealed_cards_leave_the_deck() {
    let mut s = session("Ah Kh");
    s.deal_flop([card("Qh"), card("7c"), card("2d")]).unwrap();
    assert_eq!(s.deck().len(), 47);
    assert!(!s.deck().contains(card("Qh")));

    assert_eq!(
        s.reveal(card("7c")),
        Err(AnalysisError::InvalidCard(card("7c")))
    );
    assert_eq!(
        s.reveal(card("Ah")),
        Err(AnalysisError::InvalidCard(card("Ah")))
    );
    assert_eq!(s.board().len(), 3);
}

#[test]
fn analysis_before_the_flop_is_rejected() {
    let s = session("Ah Kh");
    assert_eq!(s.street(), None);
    assert_eq!(
        s.analyze(&Scoring::default()).unwrap_err(),
        AnalysisError::InvalidBoardSize(0)
    );
}

#[test]
fn second_flop_is_rejected() {
    let mut s = session("Ah Kh");
    s.deal_flop([card("Qh"), card("7c"), card("2d")]).unwrap();
    assert_eq!(
        s.deal_flop([card("3c"), card("4c"), card("5c")]),
        Err(AnalysisError::InvalidBoardSize(6))
    );
}

#[test]
fn seeded_runout_is_reproducible() {
    let runout = |seed| {
        let mut rng = seeded_rng(seed);
        let mut s = HandSession::deal(&mut rng).unwrap();
        let mut strengths = Vec::new();
        while s.street() != Some(Street::River) {
            s.reveal_random(&mut rng).unwrap();
            let a = s
                .analyze(&Scoring::StreetNormalized(StreetDivisors::default()))
                .unwrap();
            strengths.push(a.reference().strength);
        }
        (s.hole().to_string(), s.board().to_vec(), strengths)
    };
    let first = runout(5);
    assert_eq!(first, runout(5));
    assert_eq!(first.1.len(), 5);
    assert_eq!(first.2.len(), 3);
}
