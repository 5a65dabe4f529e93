//! Simulations share nothing, so concurrent runs must agree with sequential ones.

use std::sync::Arc;

use form_automata::core::Automaton;
use form_automata::run::RunCounter;
use form_automata::{EmailAutomaton, PasswordAutomaton};

const EMAILS: &[&str] = &[
    "a@b.co",
    "a@b.c",
    "user.name+tag@sub.example.com",
    "@b.co",
    "a@@b.co",
    "",
    "mail@host-1.2nd.example.io",
];

const PASSWORDS: &[&str] = &["Abcdefg1", "abcdefg1", "Ab1", "Abcdefg!", "", "aaaaBBBB1111"];

#[tokio::test]
async fn concurrent_email_runs_match_sequential_runs() {
    let email = EmailAutomaton::default();
    let expected: Vec<_> = EMAILS.iter().map(|input| email.simulate(input)).collect();

    let handles: Vec<_> = EMAILS
        .iter()
        .map(move |input| tokio::spawn(async move { email.simulate(input) }))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[tokio::test]
async fn concurrent_password_runs_match_sequential_runs() {
    let password = PasswordAutomaton::default();
    let expected: Vec<_> = PASSWORDS
        .iter()
        .map(|input| password.simulate(input))
        .collect();

    let handles: Vec<_> = PASSWORDS
        .iter()
        .map(move |input| tokio::task::spawn_blocking(move || password.simulate(input)))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.await.unwrap(), expected);
    }
}

#[tokio::test]
async fn shared_automaton_is_usable_from_many_tasks() {
    let email = Arc::new(EmailAutomaton::with_min_tld_length(3));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let email = Arc::clone(&email);
            tokio::spawn(async move {
                let input = if i % 2 == 0 { "a@b.com" } else { "a@b.co" };
                (i, email.accepts(input))
            })
        })
        .collect();

    for handle in handles {
        let (i, accepted) = handle.await.unwrap();
        assert_eq!(accepted, i % 2 == 0);
    }
}

#[tokio::test]
async fn only_the_latest_run_stays_current() {
    let counter = Arc::new(RunCounter::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let counter = Arc::clone(&counter);
            tokio::spawn(async move { counter.begin() })
        })
        .collect();

    let mut tokens = Vec::new();
    for handle in handles {
        tokens.push(handle.await.unwrap());
    }
    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 8);

    let latest = *tokens.last().unwrap();
    assert!(counter.is_current(latest));
    assert_eq!(
        tokens.iter().filter(|t| counter.is_current(**t)).count(),
        1
    );
}

#[tokio::test]
async fn playback_stops_when_a_newer_run_begins() {
    let counter = RunCounter::new();
    let password = PasswordAutomaton::default();
    let result = password.simulate("Abcdefg1");

    let token = counter.begin();
    let mut playback = counter.playback(token, &result.steps);
    assert!(playback.next().is_some());
    assert!(playback.next().is_some());

    counter.begin();
    assert!(playback.next().is_none());
    assert!(playback.is_superseded());
}
