// Pattern Demos: Observer and Singleton
// This crate demonstrates two classic design patterns as runnable binaries.

pub mod examples {
    //! # Pattern Demos
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Observer
    //! - Subject with an ordered, duplicate-free observer list
    //! - Two concrete observers with different trigger conditions
    //! - Injectable randomness for reproducible business-logic runs
    //!
    //! ## Pattern 2: Singleton
    //! - Lazily-initialized process-wide instance (OnceLock)
    //! - Race-free first access from multiple threads
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_observer
    //! cargo run --bin p2_singleton
    //! ```
}
