//! Exception flow across an interop boundary.
//!
//! A Java-style callee declares checked exceptions; a caller on the other
//! side of the boundary handles them through try/catch arrangements, or
//! fails to. Tests EF-01 through EF-15.

use seam_analysis::model::{ModelBuilder, ProgramModel};
use seam_analysis::rules::{rule_ids, CheckedCallRule};
use seam_analysis::Analyzer;
use seam_core::config::AnalysisConfig;
use seam_core::diagnostics::{AnalysisReport, Severity};
use seam_core::types::{CallableId, NodeId, SourceLocation, TypeId};

// ---- Helpers ----

fn loc(start: u32) -> SourceLocation {
    SourceLocation::new("src/com/brokoli/lint/MyKotlinClass.kt", start, start + 26)
}

/// The shared interop fixture: a declared JDK-style hierarchy, one
/// external callee throwing IOException, one throwing both IOException
/// and IllegalStateException, and a caller whose body the tests fill in.
struct Interop {
    builder: ModelBuilder,
    io: TypeId,
    ise: TypeId,
    exception: TypeId,
    callee: CallableId,
    callee_both: CallableId,
    method_body: NodeId,
}

fn interop() -> Interop {
    let mut builder = ModelBuilder::new();
    let throwable = builder.declare_type("java.lang.Throwable", &[]);
    let exception = builder.declare_type("java.lang.Exception", &[throwable]);
    let runtime = builder.declare_type("java.lang.RuntimeException", &[exception]);
    let io = builder.declare_type("java.io.IOException", &[exception]);
    let ise = builder.declare_type("java.lang.IllegalStateException", &[runtime]);

    let callee = builder
        .method("com.brokoli.lint.MyJavaClass.javaMethod", 0, &[io])
        .unwrap();
    let callee_both = builder
        .method("com.brokoli.lint.MyJavaClass.riskyMethod", 0, &[io, ise])
        .unwrap();

    let method = builder
        .method("com.brokoli.lint.MyKotlinClass.kotlinMethod", 0, &[])
        .unwrap();
    let decl = builder.callable_decl(method, None, loc(0));
    let method_body = builder.block(Some(decl), loc(4));

    Interop {
        builder,
        io,
        ise,
        exception,
        callee,
        callee_both,
        method_body,
    }
}

impl Interop {
    fn finish(self) -> ProgramModel {
        self.builder.finish().unwrap()
    }
}

fn run_checked_calls(model: &ProgramModel) -> AnalysisReport {
    let analyzer = Analyzer::with_rules(AnalysisConfig::default(), vec![Box::new(CheckedCallRule)]);
    analyzer.analyze(model).unwrap()
}

fn assert_errors_at(report: &AnalysisReport, locations: &[SourceLocation]) {
    assert_eq!(report.diagnostics.len(), locations.len());
    for (diagnostic, expected) in report.diagnostics.iter().zip(locations) {
        assert_eq!(diagnostic.rule_id, rule_ids::CHECKED_CALL_UNHANDLED);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(&diagnostic.location, expected);
    }
}

// ---- EF-01: Unguarded call ----
// A call whose target throws IOException, with no try anywhere.
// One error at the call site, naming the uncovered type.

#[test]
fn ef_01_unguarded_call_reports_at_the_call_site() {
    let mut f = interop();
    f.builder.call(&[f.callee], Some(f.method_body), loc(6));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(6)]);
    assert!(report.diagnostics[0].message.contains("java.io.IOException"));
}

// ---- EF-02: Exact-type catch ----
// try { call } catch (IOException) is clean.

#[test]
fn ef_02_matching_catch_is_clean() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee], Some(body), loc(8));
    f.builder.catch(try_block, &[f.io], loc(9));
    let model = f.finish();

    assert!(run_checked_calls(&model).is_clean());
}

// ---- EF-03: Supertype catch ----
// catch (Exception) covers IOException through the hierarchy.

#[test]
fn ef_03_supertype_catch_is_clean() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee], Some(body), loc(8));
    f.builder.catch(try_block, &[f.exception], loc(9));
    let model = f.finish();

    assert!(run_checked_calls(&model).is_clean());
}

// ---- EF-04: Try before the call ----
// An earlier try/catch sibling does not protect a call placed after it.

#[test]
fn ef_04_catch_before_the_call_does_not_protect_it() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    f.builder.block(Some(try_block), loc(7));
    f.builder.catch(try_block, &[f.io], loc(8));
    f.builder.call(&[f.callee], Some(f.method_body), loc(12));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(12)]);
}

// ---- EF-05: Call inside the catch body ----
// A try does not protect code inside its own catch clauses.

#[test]
fn ef_05_own_catch_body_is_not_protected() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    f.builder.block(Some(try_block), loc(7));
    let catch = f.builder.catch(try_block, &[f.io], loc(8));
    f.builder.call(&[f.callee], Some(catch), loc(10));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(10)]);
}

// ---- EF-06: One guarded, one not ----
// The guarded call is clean; the trailing sibling call is reported.

#[test]
fn ef_06_only_the_call_outside_the_try_is_reported() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee], Some(body), loc(8));
    f.builder.catch(try_block, &[f.io], loc(9));
    f.builder.call(&[f.callee], Some(f.method_body), loc(13));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(13)]);
}

// ---- EF-07: Two unguarded calls ----
// Every unguarded call site is reported, in source order.

#[test]
fn ef_07_each_unguarded_call_is_reported() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    f.builder.block(Some(try_block), loc(7));
    f.builder.catch(try_block, &[f.io], loc(8));
    f.builder.call(&[f.callee], Some(f.method_body), loc(12));
    f.builder.call(&[f.callee], Some(f.method_body), loc(13));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(12), loc(13)]);
}

// ---- EF-08: Unrelated catch type ----
// catch (IllegalStateException) does not cover IOException.

#[test]
fn ef_08_unrelated_catch_does_not_cover() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee], Some(body), loc(8));
    f.builder.catch(try_block, &[f.ise], loc(9));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(8)]);
}

// ---- EF-09: Nested tries, inner covers ----

#[test]
fn ef_09_inner_try_covers() {
    let mut f = interop();
    let outer = f.builder.try_block(Some(f.method_body), loc(6));
    let outer_body = f.builder.block(Some(outer), loc(7));
    let inner = f.builder.try_block(Some(outer_body), loc(8));
    let inner_body = f.builder.block(Some(inner), loc(9));
    f.builder.call(&[f.callee], Some(inner_body), loc(10));
    f.builder.catch(inner, &[f.io], loc(11));
    f.builder.catch(outer, &[f.ise], loc(13));
    let model = f.finish();

    assert!(run_checked_calls(&model).is_clean());
}

// ---- EF-10: Nested tries, outer covers ----
// The inner try fails to cover, so the search continues outward and the
// outer try's catch resolves it.

#[test]
fn ef_10_outer_try_covers_when_inner_does_not() {
    let mut f = interop();
    let outer = f.builder.try_block(Some(f.method_body), loc(6));
    let outer_body = f.builder.block(Some(outer), loc(7));
    let inner = f.builder.try_block(Some(outer_body), loc(8));
    let inner_body = f.builder.block(Some(inner), loc(9));
    f.builder.call(&[f.callee], Some(inner_body), loc(10));
    f.builder.catch(inner, &[f.ise], loc(11));
    f.builder.catch(outer, &[f.io], loc(13));
    let model = f.finish();

    assert!(run_checked_calls(&model).is_clean());
}

// ---- EF-11: Multiple catch clauses on one try ----
// The covering clause may sit in any position.

#[test]
fn ef_11_any_catch_clause_of_the_try_counts() {
    for io_first in [true, false] {
        let mut f = interop();
        let try_block = f.builder.try_block(Some(f.method_body), loc(6));
        let body = f.builder.block(Some(try_block), loc(7));
        f.builder.call(&[f.callee], Some(body), loc(8));
        let (first, second) = if io_first { (f.io, f.ise) } else { (f.ise, f.io) };
        f.builder.catch(try_block, &[first], loc(9));
        f.builder.catch(try_block, &[second], loc(11));
        let model = f.finish();

        assert!(run_checked_calls(&model).is_clean());
    }
}

// ---- EF-12: Two thrown types, one clause each ----
// Coverage is collective across the clauses of a single try.

#[test]
fn ef_12_separate_clauses_cover_a_two_type_throw_set() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee_both], Some(body), loc(8));
    f.builder.catch(try_block, &[f.ise], loc(9));
    f.builder.catch(try_block, &[f.io], loc(11));
    let model = f.finish();

    assert!(run_checked_calls(&model).is_clean());
}

// ---- EF-13: Two thrown types, one supertype clause ----

#[test]
fn ef_13_a_shared_supertype_clause_covers_both() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee_both], Some(body), loc(8));
    f.builder.catch(try_block, &[f.exception], loc(9));
    let model = f.finish();

    assert!(run_checked_calls(&model).is_clean());
}

// ---- EF-14: Two thrown types, only one caught ----
// Partial coverage is no coverage; the try must handle the full set.

#[test]
fn ef_14_partial_coverage_is_reported() {
    let mut f = interop();
    let try_block = f.builder.try_block(Some(f.method_body), loc(6));
    let body = f.builder.block(Some(try_block), loc(7));
    f.builder.call(&[f.callee_both], Some(body), loc(8));
    f.builder.catch(try_block, &[f.ise], loc(9));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(8)]);
    assert!(report.diagnostics[0].message.contains("java.io.IOException"));
}

// ---- EF-15: Two thrown types, nothing caught ----

#[test]
fn ef_15_a_two_type_throw_set_without_any_try_is_reported() {
    let mut f = interop();
    f.builder.call(&[f.callee_both], Some(f.method_body), loc(6));
    let model = f.finish();

    let report = run_checked_calls(&model);
    assert_errors_at(&report, &[loc(6)]);
}
