#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Incremental discovery of `#[Component]` declarations and registry generation.
//!
//! # Purpose
//!
//! Scans a Rust source corpus for type declarations carrying the `#[Component]` marker and
//! produces a deterministic registry module (see `compreg-runtime`) exposing registration,
//! typed retrieval and enumeration for them. Intended to run from a consumer's `build.rs`
//! through [`BuildCtx`].
//!
//! # Mental Model
//!
//! 1. **Source:** [`corpus`] follows the crate's module tree from `lib.rs` (or `main.rs`) and
//!    turns every reached file into [`DeclarationNode`]s keyed by a stable [`NodeKey`]. Any
//!    other source can feed nodes or [`NodeChange`]s directly.
//! 2. **Classify:** [`marker::is_marked`] filters, [`marker::extract`] produces a
//!    [`Descriptor`]. Both run only on a cache miss in [`IncrementalCache`].
//! 3. **Aggregate:** [`Aggregator`] dedups by name (later in source order wins) and reports
//!    whether the [`AcceptedSet`] differs from the last committed one.
//! 4. **Emit:** [`emit()`] lowers the set into a [`RegistryModel`] and renders it. An empty set
//!    yields no artifact.
//! 5. **Publish:** [`Output::publish`] hands an emitted [`Artifact`] to an [`OutputSink`].
//!
//! # Invariants
//!
//! - No node is re-evaluated by the predicate or extractor unless its fingerprint is new.
//!   - Enforced in: [`IncrementalCache::resolve`].
//!   - Tested by: `session::tests::test_unchanged_corpus_hits_cache`
//! - Identical accepted sets render byte-identical artifacts.
//!   - Enforced in: [`emit::render`] (no hashing or iteration over unordered maps).
//!   - Tested by: `emit::tests::test_emit_is_deterministic`
//! - A failed pass emits nothing and is not committed.
//!   - Enforced in: [`Generator`] (commit after successful emission only).
//!   - Tested by: `session::tests::test_failed_pass_is_not_committed`

pub mod aggregate;
pub mod build;
pub mod cache;
pub mod config;
pub mod corpus;
pub mod emit;
pub mod error;
pub mod marker;
pub mod node;
pub mod session;
pub mod sink;

pub use aggregate::{AcceptedSet, Aggregate, Aggregator};
pub use build::BuildCtx;
pub use cache::{CacheStats, IncrementalCache};
pub use config::{CollisionPolicy, EvictionPolicy, GeneratorConfig};
pub use emit::{Artifact, RegistryModel, emit};
pub use error::{BuildError, CorpusError, GenerateError, SinkError};
pub use marker::{Descriptor, MARKER};
pub use node::{DeclarationNode, Fingerprint, NodeChange, NodeKey};
pub use session::{Generator, Output};
pub use sink::{OutDirSink, OutputSink};

#[cfg(test)]
pub(crate) mod test_fixtures;
