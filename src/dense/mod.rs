pub use crate::MatTrait;

mod mat;
mod iter;
pub use mat::Mat;
pub use iter::{Iter, IterMut};
