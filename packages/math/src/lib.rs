pub mod pythagorean;

pub use pythagorean::{
    count_singular_perimeters, count_singular_perimeters_parallel, perimeter_tally,
    PrimitiveTriples, Triple, TriangleError,
};
