//! Classification of every iterator in the crate against the lattice.
//!
//! ```text
//! Contiguous ⊃ RandomAccess ⊃ Bidirectional ⊃ Forward ⊃ Input
//! Output (orthogonal)
//! ```

use tola_traits::iter::archetypes::{
    Bidirectional, Contiguous, Counting, Forward, Input, Output, RandomAccess,
};
use tola_traits::iter::{
    BackInserter, BidirectionalIter, Capability, ContiguousIter, ForwardIter, InputIter, OutputIter,
    Ptr, PtrMut, RandomAccessIter, classify, satisfies,
};

type P = Ptr<'static, i32>;
type M = PtrMut<'static, i32>;

// ============================================================================
// NATIVE CATEGORIES
// ============================================================================

#[test]
fn test_every_iterator_reports_its_native_tag() {
    assert_eq!(classify::<P>(), Capability::Contiguous);
    assert_eq!(classify::<M>(), Capability::Contiguous);
    assert_eq!(classify::<BackInserter<'static, i32>>(), Capability::Output);

    assert_eq!(classify::<Input<P>>(), Capability::Input);
    assert_eq!(classify::<Forward<P>>(), Capability::Forward);
    assert_eq!(classify::<Bidirectional<P>>(), Capability::Bidirectional);
    assert_eq!(classify::<RandomAccess<P>>(), Capability::RandomAccess);
    assert_eq!(classify::<Contiguous<P>>(), Capability::Contiguous);
    assert_eq!(classify::<Output<M>>(), Capability::Output);
}

#[test]
fn test_counting_is_transparent() {
    assert_eq!(classify::<Counting<'static, P>>(), Capability::Contiguous);
    assert_eq!(classify::<Counting<'static, Forward<P>>>(), Capability::Forward);
    assert_eq!(classify::<Counting<'static, BackInserter<'static, u8>>>(), Capability::Output);
}

#[test]
fn test_archetypes_nest_downwards_only() {
    // The outermost wrapper decides.
    assert_eq!(classify::<Input<RandomAccess<P>>>(), Capability::Input);
    assert_eq!(classify::<Forward<Contiguous<P>>>(), Capability::Forward);
}

// ============================================================================
// SATISFACTION MATRIX
// ============================================================================

#[test]
fn test_satisfaction_matrix() {
    let natives = [
        classify::<Output<M>>(),
        classify::<Input<P>>(),
        classify::<Forward<P>>(),
        classify::<Bidirectional<P>>(),
        classify::<RandomAccess<P>>(),
        classify::<Contiguous<P>>(),
    ];
    // Rows are natives, columns are requirements, both in `Capability::ALL` order.
    let expected = [
        [true, false, false, false, false, false],
        [false, true, false, false, false, false],
        [false, true, true, false, false, false],
        [false, true, true, true, false, false],
        [false, true, true, true, true, false],
        [false, true, true, true, true, true],
    ];
    for (row, native) in natives.into_iter().enumerate() {
        for (col, required) in Capability::ALL.into_iter().enumerate() {
            assert_eq!(native.satisfies(required), expected[row][col], "{native} vs {required}");
        }
    }
}

#[test]
fn test_satisfies_function_uses_native_tag() {
    assert!(satisfies::<P>(Capability::RandomAccess));
    assert!(!satisfies::<Forward<P>>(Capability::Bidirectional));
    assert!(!satisfies::<BackInserter<'static, i32>>(Capability::Input));
    assert!(satisfies::<BackInserter<'static, i32>>(Capability::Output));
    const CHECK: bool = satisfies::<Bidirectional<P>>(Capability::Forward);
    assert!(CHECK);
}

// ============================================================================
// STRUCTURAL CHECKS
// ============================================================================

#[test]
fn test_structural_probe_agrees_with_archetypes() {
    assert!(tola_traits::satisfies!(Forward<P>: ForwardIter));
    assert!(!tola_traits::satisfies!(Forward<P>: BidirectionalIter));
    assert!(tola_traits::satisfies!(Bidirectional<P>: BidirectionalIter));
    assert!(!tola_traits::satisfies!(Bidirectional<P>: RandomAccessIter));
    assert!(!tola_traits::satisfies!(RandomAccess<P>: ContiguousIter));
    assert!(tola_traits::satisfies!(Contiguous<P>: ContiguousIter));
    assert!(!tola_traits::satisfies!(Input<P>: ForwardIter));
}

#[test]
fn test_output_and_input_are_disjoint_structurally() {
    assert!(tola_traits::satisfies!(BackInserter<'static, i32>: OutputIter<i32>));
    assert!(!tola_traits::satisfies!(BackInserter<'static, i32>: InputIter));
    assert!(!tola_traits::satisfies!(P: OutputIter<i32>));
    assert!(tola_traits::satisfies!(M: OutputIter<i32>));
    assert!(!tola_traits::satisfies!(Output<M>: InputIter));
}

#[test]
fn test_non_copy_mutable_pointers_are_output_only() {
    assert!(tola_traits::satisfies!(PtrMut<'static, String>: OutputIter<String>));
    assert!(!tola_traits::satisfies!(PtrMut<'static, String>: InputIter));
}
