//! Property-based tests for the bounded subsequence search

use std::cell::{Cell, RefCell};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use subseqfind::{Candidates, DeletionCombination, SearchStatus, SubsequenceSearch};

const MAX_LEN: usize = 8;

/// Keep inputs small: candidates grow as 2^n
fn shrink(mut items: Vec<u8>) -> Vec<u8> {
    items.truncate(MAX_LEN);
    items
}

fn is_subsequence(candidate: &[u8], sequence: &[u8]) -> bool {
    let mut rest = sequence.iter();
    candidate.iter().all(|item| rest.any(|other| other == item))
}

/// Predicate family parameterized by a modulus so quickcheck explores many
fn sum_divisible(modulus: u8) -> impl Fn(&(), &[u8]) -> bool {
    let modulus = u32::from(modulus.max(2));
    move |_: &(), candidate: &[u8]| candidate.iter().map(|&x| u32::from(x)).sum::<u32>() % modulus == 0
}

#[quickcheck]
fn prop_match_is_order_preserving_subsequence(items: Vec<u8>, modulus: u8) -> TestResult {
    let items = shrink(items);
    if items.is_empty() {
        return TestResult::discard();
    }
    let predicate = sum_divisible(modulus);
    let outcome = SubsequenceSearch::with_max_evaluations(1 << 12).search(&(), &items, &predicate);
    match outcome.report.status {
        SearchStatus::Matched => {
            let deletions = outcome.report.deletions.clone().unwrap_or_default();
            TestResult::from_bool(
                !outcome.subsequence.is_empty()
                    && is_subsequence(&outcome.subsequence, &items)
                    && predicate(&(), outcome.subsequence.as_slice())
                    && deletions.apply(&items) == outcome.subsequence,
            )
        }
        SearchStatus::NotFound => TestResult::from_bool(outcome.subsequence.is_empty()),
        _ => TestResult::failed(),
    }
}

#[quickcheck]
fn prop_match_has_fewest_deletions(items: Vec<u8>, modulus: u8) -> TestResult {
    let items = shrink(items);
    if items.is_empty() {
        return TestResult::discard();
    }
    let predicate = sum_divisible(modulus);
    let outcome = SubsequenceSearch::with_max_evaluations(1 << 12).search(&(), &items, &predicate);

    // Brute force over the same order: the first matching candidate
    let first = Candidates::new(items.len()).find(|c| predicate(&(), c.apply(&items).as_slice()));
    TestResult::from_bool(outcome.report.deletions == first)
}

#[quickcheck]
fn prop_evaluations_follow_candidate_order(len: u8) -> TestResult {
    let len = usize::from(len) % (MAX_LEN + 1);
    let items: Vec<usize> = (0..len).collect();
    let seen = RefCell::new(Vec::new());
    SubsequenceSearch::with_max_evaluations(1 << 12).search(&(), &items, |_, candidate: &[usize]| {
        seen.borrow_mut().push(candidate.to_vec());
        false
    });
    let expected: Vec<Vec<usize>> = Candidates::new(len).map(|c| c.apply(&items)).collect();
    TestResult::from_bool(seen.into_inner() == expected)
}

#[quickcheck]
fn prop_budget_bounds_evaluations(items: Vec<u8>, max_evaluations: i8) -> TestResult {
    let items = shrink(items);
    if items.is_empty() {
        return TestResult::discard();
    }
    let calls = Cell::new(0i64);
    let outcome = SubsequenceSearch::with_max_evaluations(i64::from(max_evaluations)).search(
        &(),
        &items,
        |_, _| {
            calls.set(calls.get() + 1);
            false
        },
    );
    let bound = i64::from(max_evaluations).max(1);
    TestResult::from_bool(
        calls.get() <= bound
            && calls.get() == outcome.report.evaluations as i64
            && outcome.subsequence.is_empty(),
    )
}

#[quickcheck]
fn prop_searches_are_deterministic(items: Vec<u8>, modulus: u8, max_evaluations: u8) -> TestResult {
    let items = shrink(items);
    let search = SubsequenceSearch::with_max_evaluations(i64::from(max_evaluations));
    let predicate = sum_divisible(modulus);
    let first = search.search(&(), &items, &predicate);
    let second = search.search(&(), &items, &predicate);
    TestResult::from_bool(first == second)
}

#[quickcheck]
fn prop_deletions_never_remove_everything(len: u8) -> TestResult {
    let len = usize::from(len) % MAX_LEN + 1;
    let all_but_one = Candidates::new(len).all(|c: DeletionCombination| c.len() < len);
    TestResult::from_bool(all_but_one)
}
