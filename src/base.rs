use derive_more::Display;

pub trait MatTrait {
    fn shape(&self) -> (usize, usize);
    fn nrows(&self) -> usize { self.shape().0 }
    fn ncols(&self) -> usize { self.shape().1 }
    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }
    fn is_empty(&self) -> bool {
        let (m, n) = self.shape();
        m == 0 || n == 0
    }
    fn nelems(&self) -> usize {
        let (m, n) = self.shape();
        m * n
    }

    // None for empty shapes, avoiding the `m * n - 1` underflow.
    fn max_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.nelems() - 1)
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum MatError {
    #[display("invalid index")]
    IndexOutOfBounds,

    #[display("failed call to an expired iterator")]
    ExpiredIterator,
}

impl std::error::Error for MatError {}
