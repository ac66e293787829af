//! Tests for Reader.
//!
//! Covers construction, environment access, bottom propagation and the
//! monad laws (checked with proptest).

use chronicle::effect::{BottomError, Reader, ReaderResult, Status};
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, PartialEq)]
struct Config {
    port: u16,
    host: String,
    debug: bool,
}

fn config() -> Config {
    Config {
        port: 8080,
        host: "localhost".to_string(),
        debug: false,
    }
}

// =============================================================================
// Construction and Access
// =============================================================================

#[rstest]
fn ask_returns_environment() {
    let reader: Reader<Config, Config> = Reader::ask();
    assert_eq!(reader.run(config()).into_value(), Ok(config()));
}

#[rstest]
fn asks_projects_environment() {
    let reader: Reader<Config, u16> = Reader::asks(|environment: Config| environment.port);
    assert_eq!(reader.run(config()).into_value(), Ok(8080));
}

#[rstest]
fn pure_ignores_environment() {
    let reader: Reader<Config, i32> = Reader::pure(42);
    assert_eq!(reader.run(config()).value(), Some(&42));
}

#[rstest]
fn from_fn_may_short_circuit() {
    let reader: Reader<Config, u16> = Reader::from_fn(|environment: Config| {
        if environment.debug {
            ReaderResult::new(environment.port)
        } else {
            ReaderResult::bottom()
        }
    });
    assert_eq!(reader.run(config()).status(), Status::Bottom);
    let debug = Config { debug: true, ..config() };
    assert_eq!(reader.run(debug).into_value(), Ok(8080));
}

#[rstest]
fn local_modifies_environment_for_inner_reader() {
    let reader: Reader<Config, u16> = Reader::asks(|environment: Config| environment.port);
    let shifted = reader.local(|environment| Config { port: environment.port + 1, ..environment });
    assert_eq!(shifted.run(config()).into_value(), Ok(8081));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn fmap_transforms_value() {
    let reader: Reader<Config, String> = Reader::asks(|environment: Config| environment.host)
        .fmap(|host| host.to_uppercase());
    assert_eq!(reader.run(config()).into_value(), Ok("LOCALHOST".to_string()));
}

#[rstest]
fn flat_map_shares_environment() {
    let address: Reader<Config, String> = Reader::asks(|environment: Config| environment.host)
        .and_then(|host| Reader::asks(move |environment: Config| format!("{host}:{}", environment.port)));
    assert_eq!(address.run(config()).into_value(), Ok("localhost:8080".to_string()));
}

#[rstest]
#[case(8080, false)]
#[case(80, true)]
fn filter_rejects_low_ports(#[case] port: u16, #[case] bottom: bool) {
    let reader: Reader<Config, u16> =
        Reader::asks(|environment: Config| environment.port).filter(|port| *port >= 1024);
    let environment = Config { port, ..config() };
    assert_eq!(reader.run(environment).is_bottom(), bottom);
}

#[rstest]
fn bottom_skips_every_closure() {
    let called = Arc::new(AtomicBool::new(false));
    let first = Arc::clone(&called);
    let second = Arc::clone(&called);
    let third = Arc::clone(&called);

    let reader: Reader<Config, i32> = Reader::<Config, i32>::bottom()
        .fmap(move |x| {
            first.store(true, Ordering::SeqCst);
            x
        })
        .flat_map(move |x| {
            second.store(true, Ordering::SeqCst);
            Reader::pure(x)
        })
        .fold(0, move |seed, x| {
            third.store(true, Ordering::SeqCst);
            seed + x
        });

    let result = reader.run(config());
    assert!(result.is_bottom());
    assert_eq!(result.into_value(), Err(BottomError { effect_name: "Reader" }));
    assert!(!called.load(Ordering::SeqCst));
}

#[rstest]
fn bottom_result_into_option_is_none() {
    let reader: Reader<Config, i32> = Reader::bottom();
    assert_eq!(reader.run(config()).into_option(), None);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    /// Left Identity: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_reader_left_identity(value in -1000i32..1000i32, environment in -1000i32..1000i32) {
        let function = |a: i32| Reader::new(move |environment: i32| a.wrapping_add(environment));
        let left = Reader::pure(value).flat_map(function);
        let right = function(value);
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    /// Right Identity: m.flat_map(pure) == m
    #[test]
    fn prop_reader_right_identity(environment in -1000i32..1000i32, threshold in -1000i32..1000i32) {
        let reader: Reader<i32, i32> = Reader::ask().filter(move |x| *x > threshold);
        prop_assert_eq!(reader.clone().flat_map(Reader::pure).run(environment), reader.run(environment));
    }

    /// Associativity with a bottom-producing step.
    #[test]
    fn prop_reader_associativity(environment in -1000i32..1000i32) {
        let first = |x: i32| Reader::new(move |environment: i32| x.wrapping_mul(2).wrapping_add(environment))
            .filter(|y| y % 3 != 0);
        let second = |x: i32| Reader::new(move |environment: i32| x.wrapping_sub(environment));
        let reader: Reader<i32, i32> = Reader::ask();

        let left = reader.clone().flat_map(first).flat_map(second);
        let right = reader.flat_map(move |x| first(x).flat_map(second));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    /// Ask Retrieval: ask().run(r) == r
    #[test]
    fn prop_reader_ask_retrieval(environment in any::<i64>()) {
        prop_assert_eq!(Reader::ask().run(environment).into_value(), Ok(environment));
    }
}
