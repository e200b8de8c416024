use std::fmt::{Display, Formatter};
use std::iter::zip;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign, Index, IndexMut};
use auto_impl_ops::auto_ops;
use itertools::Itertools;
use num_traits::{Zero, One};
use crate::{MatTrait, MatError};
use super::iter::{Iter, IterMut};

// Dense matrix over an owned row-major buffer.
// `elements.len() == rows * cols` holds for every constructed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mat<R> {
    shape: (usize, usize),
    elements: Vec<R>
}

impl<R> MatTrait for Mat<R> {
    fn shape(&self) -> (usize, usize) {
        self.shape
    }
}

impl<R> Mat<R> {
    fn new(shape: (usize, usize), elements: Vec<R>) -> Self {
        assert_eq!(elements.len(), shape.0 * shape.1);
        Self { shape, elements }
    }

    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        Self::new(shape, data.into_iter().collect())
    }

    pub fn filled(shape: (usize, usize), value: R) -> Self
    where R: Clone {
        Self::new(shape, vec![value; shape.0 * shape.1])
    }

    pub fn zero(shape: (usize, usize)) -> Self
    where R: Zero {
        Self::from_data(shape, (0 .. shape.0 * shape.1).map(|_| R::zero()))
    }

    pub fn is_zero(&self) -> bool
    where R: Zero {
        self.entries().all(|e| e.2.is_zero())
    }

    pub fn id(size: usize) -> Self
    where R: Zero + One {
        Self::diag((size, size), (0 .. size).map(|_| R::one()))
    }

    pub fn is_id(&self) -> bool
    where R: Zero + One + PartialEq {
        self.is_square() && self.entries().all(|(i, j, a)|
            i == j && a.is_one() ||
            i != j && a.is_zero()
        )
    }

    pub fn diag<I>(shape: (usize, usize), entries: I) -> Self
    where R: Zero, I: IntoIterator<Item = R> {
        let mut mat = Self::zero(shape);
        for (i, a) in entries.into_iter().enumerate() {
            mat[(i, i)] = a;
        }
        mat
    }

    pub fn is_diag(&self) -> bool
    where R: Zero {
        self.entries().all(|(i, j, a)|
            i == j || a.is_zero()
        )
    }

    fn index_of(&self, i: usize, j: usize) -> Option<usize> {
        let (m, n) = self.shape;
        (i < m && j < n).then_some(i * n + j)
    }

    pub fn at(&self, i: usize, j: usize) -> Result<&R, MatError> {
        let k = self.index_of(i, j).ok_or(MatError::IndexOutOfBounds)?;
        Ok(&self.elements[k])
    }

    pub fn at_mut(&mut self, i: usize, j: usize) -> Result<&mut R, MatError> {
        let k = self.index_of(i, j).ok_or(MatError::IndexOutOfBounds)?;
        Ok(&mut self.elements[k])
    }

    pub fn at_linear(&self, k: usize) -> Result<&R, MatError> {
        self.elements.get(k).ok_or(MatError::IndexOutOfBounds)
    }

    pub fn at_linear_mut(&mut self, k: usize) -> Result<&mut R, MatError> {
        self.elements.get_mut(k).ok_or(MatError::IndexOutOfBounds)
    }

    pub fn iter(&self) -> Iter<R> {
        Iter::new(&self.elements)
    }

    pub fn iter_mut(&mut self) -> IterMut<R> {
        IterMut::new(&mut self.elements)
    }

    // (row, col, element) triplets in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        let n = self.ncols();
        self.elements.iter().enumerate().map(move |(k, a)|
            (k / n, k % n, a)
        )
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.nrows() && j < self.nrows());

        if i == j {
            return
        }

        let n = self.ncols();
        for k in 0 .. n {
            self.elements.swap(i * n + k, j * n + k);
        }
    }

    pub fn swap_cols(&mut self, i: usize, j: usize) {
        assert!(i < self.ncols() && j < self.ncols());

        if i == j {
            return
        }

        let n = self.ncols();
        for k in 0 .. self.nrows() {
            self.elements.swap(k * n + i, k * n + j);
        }
    }
}

impl<R> Default for Mat<R> {
    fn default() -> Self {
        Self { shape: (0, 0), elements: Vec::new() }
    }
}

impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    fn index(&self, (i, j): (usize, usize)) -> &R {
        self.at(i, j).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut R {
        self.at_mut(i, j).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<R> Index<usize> for Mat<R> {
    type Output = R;
    fn index(&self, k: usize) -> &R {
        self.at_linear(k).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<R> IndexMut<usize> for Mat<R> {
    fn index_mut(&mut self, k: usize) -> &mut R {
        self.at_linear_mut(k).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<'a, R> IntoIterator for &'a Mat<R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, R> IntoIterator for &'a mut Mat<R> {
    type Item = &'a mut R;
    type IntoIter = IterMut<'a, R>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<R> IntoIterator for Mat<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

// Debug rendering, e.g. "[ 1 2; \n3 4]". Not meant to be parsed back.
impl<R> Display for Mat<R>
where R: Display {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "[ ]")
        }

        let body = self.elements
            .chunks(self.ncols())
            .map(|row| row.iter().join(" "))
            .join("; \n");

        write!(f, "[ {body}]")
    }
}

impl<R> Neg for Mat<R>
where R: Neg<Output = R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let elements = self.elements.into_iter().map(|a| -a).collect();
        Self::new(self.shape, elements)
    }
}

impl<R> Neg for &Mat<R>
where R: Clone + Neg<Output = R> {
    type Output = Mat<R>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[auto_ops]
impl<R> AddAssign<&Mat<R>> for Mat<R>
where R: Clone + AddAssign {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape());
        for (a, b) in zip(self.elements.iter_mut(), rhs.elements.iter()) {
            *a += b.clone();
        }
    }
}

#[auto_ops]
impl<R> SubAssign<&Mat<R>> for Mat<R>
where R: Clone + SubAssign {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape());
        for (a, b) in zip(self.elements.iter_mut(), rhs.elements.iter()) {
            *a -= b.clone();
        }
    }
}

#[cfg(feature = "serde")]
impl<R> serde::Serialize for Mat<R>
where R: serde::Serialize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        (self.shape, &self.elements).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for Mat<R>
where R: serde::Deserialize<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let (shape, elements): ((usize, usize), Vec<R>) =
            serde::Deserialize::deserialize(deserializer)?;

        if elements.len() != shape.0 * shape.1 {
            return Err(serde::de::Error::custom("element count does not match shape"))
        }

        Ok(Self { shape, elements })
    }
}

#[cfg(test)]
impl<R> Mat<R>
where R: Zero + One {
    pub fn rand(shape: (usize, usize), density: f64) -> Self {
        use cartesian::cartesian;
        use rand::Rng;

        let (m, n) = shape;
        let range = cartesian!(0..m, 0..n);
        let mut rng = rand::thread_rng();

        Self::from_data(shape, range.map(|_|
            if rng.gen::<f64>() < density {
                R::one()
            } else {
                R::zero()
            }
        ))
    }
}
