use boardrank_engine::analysis::{analyze, Analysis};
use boardrank_engine::cards::{parse_cards, HoleCombination};
use boardrank_engine::condensed::condense;
use boardrank_engine::deck::Deck;
use boardrank_engine::hand::Category;
use boardrank_engine::stats::{tie_report, tier_statistics};
use boardrank_engine::strength::Scoring;
use boardrank_engine::tiers::Street;

fn analysis(hole: &str, board: &str) -> Analysis {
    let hole = parse_cards(hole).unwrap();
    let board = parse_cards(board).unwrap();
    let deck = Deck::without(&[hole.clone(), board.clone()].concat()).unwrap();
    let reference = HoleCombination::from_slice(&hole).unwrap();
    let street = Street::from_board_len(board.len()).unwrap();
    analyze(&deck, &board, &reference, street, &Scoring::default()).unwrap()
}

#[test]
fn counts_partition_the_field() {
    let a = analysis("Ks Qs", "7c 7d 2h");
    for tier in 1..=a.population().last_tier() {
        let stats = tier_statistics(a.entries(), tier);
        assert_eq!(stats.above_count, a.population().better_than(tier));
        assert_eq!(stats.below_count, a.population().worse_than(tier));
        assert_eq!(stats.tie_size, a.population().get(tier));
        assert_eq!(stats.tiers_above as u32, tier - 1);
        assert_eq!(stats.tiers_below as u32, a.population().last_tier() - tier);
        assert_eq!(stats.total, a.entries().len());
    }
}

#[test]
fn unknown_tier_has_no_ties() {
    let a = analysis("Ks Qs", "7c 7d 2h");
    let past_the_end = a.population().last_tier() + 1;
    let stats = tier_statistics(a.entries(), past_the_end);
    assert_eq!(stats.tie_size, 0);
    assert_eq!(stats.below_count, 0);
    assert_eq!(stats.above_count, a.entries().len());
}

#[test]
fn tie_report_lists_every_crowded_tier() {
    let a = analysis("Ks Qs", "7c 7d 2h");
    let report = tie_report(a.entries());
    assert!(!report.is_empty());
    for (tier, count) in a.population().iter() {
        if count > 1 {
            assert_eq!(report.size(tier), Some(count));
        } else {
            assert_eq!(report.size(tier), None);
        }
    }
    assert_eq!(
        report.tied_entries(),
        report.iter().map(|(_, n)| n).sum::<usize>()
    );
    assert_eq!(report.len(), report.tied_tiers().len());
}

#[test]
fn lone_royal_flush_is_untied() {
    let a = analysis("As Ks", "Qs Js Ts");
    let stats = a.statistics();
    assert_eq!(stats.tier, 1);
    assert_eq!(stats.tie_size, 1);
    assert!(!stats.is_tied());
    assert_eq!(stats.tiers_above, 0);
    assert_eq!(a.ties().size(1), None);
}

#[test]
fn condensed_view_on_a_paired_board() {
    let a = analysis("Ks Qs", "7c 7d 2h");
    let tiers = condense(a.entries());
    assert_eq!(tiers.len() as u32, a.population().last_tier());

    assert_eq!(tiers[0].hands, vec!["77"]);
    assert_eq!(tiers[0].category, Category::FourOfAKind);
    assert_eq!(tiers[0].cards_used, 2);
    assert_eq!(tiers[0].strength, 100.0);

    // 7h/7s with 2c/2d/2s; only 7s2s is suited
    assert_eq!(tiers[1].hands, vec!["72os"]);
    assert_eq!(tiers[1].combinations, 6);
    assert_eq!(tiers[1].category, Category::FullHouse);

    assert_eq!(tiers[2].hands, vec!["22"]);
    assert_eq!(tiers[2].combinations, 3);

    assert_eq!(tiers[3].hands, vec!["A7os"]);
    assert_eq!(tiers[3].category, Category::ThreeOfAKind);
}

#[test]
fn condensed_view_marks_suited_only_hands() {
    let a = analysis("As Ks", "Qs Js Ts");
    let tiers = a.condensed();
    assert_eq!(tiers[0].hands, vec!["AKs"]);
    // K9s would share the king with the reference, so Q-high is next
    assert_eq!(tiers[1].hands, vec!["98s"]);
    assert_eq!(tiers[1].category, Category::StraightFlush);
    assert_eq!(tiers[2].hands, vec!["97s"]);
    assert_eq!(tiers[2].category, Category::Flush);
}
