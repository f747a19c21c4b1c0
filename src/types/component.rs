//! Numeric component kinds carried by snapshot fields.
//!
//! Every field value is one of a small set of fixed-size kinds: a scalar,
//! a 3-vector, or a 3×3 tensor (full, symmetric or spherical). The POD
//! pipeline only needs three things from a kind: a zero, scaled
//! accumulation, and the natural inner product
//!
//! ```text
//! scalar:      a · b = a b
//! vector:      a · b = Σᵢ aᵢ bᵢ
//! tensor:      a : b = Σᵢⱼ aᵢⱼ bᵢⱼ
//! ```
//!
//! Symmetric tensors store six entries, so off-diagonal entries count twice
//! in the double contraction. Spherical tensors store the single diagonal
//! value, which counts three times.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// A fixed-size numeric value stored at one degree of freedom.
pub trait FieldComponent: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Number of independent scalar entries.
    const N_COMPONENTS: usize;

    /// Additive identity.
    fn zero() -> Self;

    /// Natural inner product of two values of this kind.
    fn inner(&self, other: &Self) -> f64;

    /// Return `s * self`.
    fn scaled(&self, s: f64) -> Self;

    /// `self += s * other`.
    fn add_scaled(&mut self, s: f64, other: &Self);

    /// Whether every stored entry is finite.
    fn is_finite(&self) -> bool;

    /// Squared magnitude, `self · self`.
    #[inline]
    fn mag_sqr(&self) -> f64 {
        self.inner(self)
    }
}

impl FieldComponent for f64 {
    const N_COMPONENTS: usize = 1;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn inner(&self, other: &Self) -> f64 {
        self * other
    }

    #[inline]
    fn scaled(&self, s: f64) -> Self {
        s * self
    }

    #[inline]
    fn add_scaled(&mut self, s: f64, other: &Self) {
        *self += s * other;
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

/// Raw arrays act as N-component vectors with the Euclidean inner product.
impl<const N: usize> FieldComponent for [f64; N] {
    const N_COMPONENTS: usize = N;

    #[inline]
    fn zero() -> Self {
        [0.0; N]
    }

    #[inline]
    fn inner(&self, other: &Self) -> f64 {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    #[inline]
    fn scaled(&self, s: f64) -> Self {
        let mut out = *self;
        for v in &mut out {
            *v *= s;
        }
        out
    }

    #[inline]
    fn add_scaled(&mut self, s: f64, other: &Self) {
        for (a, b) in self.iter_mut().zip(other.iter()) {
            *a += s * b;
        }
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.iter().all(|v| v.is_finite())
    }
}

/// Implements the array-backed component kinds together with their
/// arithmetic operators. `$weights` are the multiplicities of each stored
/// entry in the inner product.
macro_rules! array_component {
    (
        $(#[$meta:meta])*
        $name:ident, $n:literal, $weights:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub [f64; $n]);

        impl $name {
            const INNER_WEIGHTS: [f64; $n] = $weights;

            /// Create from the stored entries.
            #[inline]
            pub const fn from_array(values: [f64; $n]) -> Self {
                Self(values)
            }

            /// Stored entries.
            #[inline]
            pub const fn to_array(self) -> [f64; $n] {
                self.0
            }
        }

        impl FieldComponent for $name {
            const N_COMPONENTS: usize = $n;

            #[inline]
            fn zero() -> Self {
                Self([0.0; $n])
            }

            #[inline]
            fn inner(&self, other: &Self) -> f64 {
                let mut sum = 0.0;
                for i in 0..$n {
                    sum += Self::INNER_WEIGHTS[i] * self.0[i] * other.0[i];
                }
                sum
            }

            #[inline]
            fn scaled(&self, s: f64) -> Self {
                Self(self.0.scaled(s))
            }

            #[inline]
            fn add_scaled(&mut self, s: f64, other: &Self) {
                self.0.add_scaled(s, &other.0);
            }

            #[inline]
            fn is_finite(&self) -> bool {
                self.0.is_finite()
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                let mut out = self;
                out.add_scaled(1.0, &other);
                out
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                let mut out = self;
                out.add_scaled(-1.0, &other);
                out
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            fn mul(self, s: f64) -> Self {
                self.scaled(s)
            }
        }
    };
}

array_component!(
    /// Cartesian 3-vector (e.g. velocity).
    Vector3,
    3,
    [1.0; 3]
);

array_component!(
    /// Full 3×3 tensor, row-major `[xx, xy, xz, yx, yy, yz, zx, zy, zz]`.
    Tensor3,
    9,
    [1.0; 9]
);

array_component!(
    /// Symmetric 3×3 tensor stored as `[xx, xy, xz, yy, yz, zz]`
    /// (e.g. Reynolds stress).
    SymmTensor3,
    6,
    [1.0, 2.0, 2.0, 1.0, 2.0, 1.0]
);

array_component!(
    /// Spherical tensor `a I`, stored as the single diagonal value.
    SphericalTensor3,
    1,
    [3.0]
);

impl Vector3 {
    /// Create a vector from its Cartesian components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// x component.
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    /// y component.
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    /// z component.
    pub const fn z(&self) -> f64 {
        self.0[2]
    }
}

impl SymmTensor3 {
    /// Create from the six independent entries.
    pub const fn new(xx: f64, xy: f64, xz: f64, yy: f64, yz: f64, zz: f64) -> Self {
        Self([xx, xy, xz, yy, yz, zz])
    }

    /// Expand to the full row-major tensor.
    pub fn to_tensor(&self) -> Tensor3 {
        let [xx, xy, xz, yy, yz, zz] = self.0;
        Tensor3([xx, xy, xz, xy, yy, yz, xz, yz, zz])
    }
}

impl SphericalTensor3 {
    /// Create the spherical tensor `ii I`.
    pub const fn new(ii: f64) -> Self {
        Self([ii])
    }

    /// Expand to the full row-major tensor.
    pub fn to_tensor(&self) -> Tensor3 {
        let ii = self.0[0];
        Tensor3([ii, 0.0, 0.0, 0.0, ii, 0.0, 0.0, 0.0, ii])
    }
}
