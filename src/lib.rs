//! # Functional Pipeline Patterns
//!
//! This crate contains examples for functional pipeline patterns:
//! first-class functions, map/filter/reduce, collectors, and comparator
//! composition.
//!
//! ## Patterns Covered
//!
//! 1. **Closures and Function Values**
//!    - Supplier and consumer closures
//!    - Predicate composition with short-circuit and/or/not
//!    - Consumer sequencing
//!    - Comparator composition with tie-break fallthrough
//!
//! 2. **Map, Filter, Reduce**
//!    - Mapping records to derived values
//!    - Filtering with predicates
//!    - Flattening nested sequences (flat_map)
//!
//! 3. **Building Iterators**
//!    - Iterators from arrays, strings, and regex splits
//!    - For-loop to iterator migration
//!    - skip/take and take_while/skip_while
//!    - Line-by-line file reading
//!
//! 4. **Reduction**
//!    - Left fold with an explicit seed
//!    - Partitioned parallel reduction with rayon
//!
//! 5. **Collectors**
//!    - Collecting into Vec, set, and map
//!    - Joining, counting, summarizing
//!    - Grouping by key and partitioning by predicate
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Closures and Function Values
//! cargo run --bin p1_closure_basics
//! cargo run --bin p1_predicate_consumer
//! cargo run --bin p1_chaining
//! cargo run --bin p1_comparators
//!
//! # Pattern 2: Map, Filter, Reduce
//! cargo run --bin p2_map_filter_reduce
//! cargo run --bin p2_flat_map_pairs
//!
//! # Pattern 3: Building Iterators
//! cargo run --bin p3_iterator_sources
//! cargo run --bin p3_for_loop_to_iterator
//! cargo run --bin p3_skip_take
//! cargo run --bin p3_take_drop_while
//! cargo run --bin p3_lines_from_file
//!
//! # Pattern 4: Reduction
//! cargo run --bin p4_parallel_reduce
//!
//! # Pattern 5: Collectors
//! cargo run --bin p5_collectors
//! cargo run --bin p5_grouping
//! ```

pub mod collect;
pub mod compose;
pub mod model;
pub mod ordering;
pub mod pipeline;
