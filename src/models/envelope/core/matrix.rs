//! Heat transfer matrices for layers and assembled components.

use std::ops::Mul;

use num_complex::Complex64;

use crate::models::envelope::{
    direction::{HeatFlowDirection, SurfaceResistances},
    layer::{Layer, LayerKind},
};

/// A 2×2 complex heat transfer matrix.
///
/// Relates the sinusoidal temperature and heat flux amplitudes on the two
/// faces of a layer or of a whole component (ISO 13786). For the lossless
/// formulation used here the determinant magnitude stays close to one,
/// which the tests use as a numerical sanity check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatTransferMatrix {
    elements: [[Complex64; 2]; 2],
}

impl HeatTransferMatrix {
    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            elements: [
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            ],
        }
    }

    /// Matrix of a purely resistive element: `[[1, -R], [0, 1]]`.
    ///
    /// Used for surface films and unventilated air gaps, which neither damp
    /// nor store the temperature wave.
    #[must_use]
    pub fn resistive(resistance: f64) -> Self {
        Self {
            elements: [
                [Complex64::new(1.0, 0.0), Complex64::new(-resistance, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            ],
        }
    }

    /// Matrix of a finite material slab.
    ///
    /// Closed-form solution of the one-dimensional periodic heat conduction
    /// equation for a slab with dimensionless ratio ξ, penetration depth δ
    /// in meters, and conductivity λ in W/(m·K). The real/imaginary split
    /// carries amplitude damping and phase lag jointly; no iteration is
    /// involved.
    #[must_use]
    pub fn slab(xi: f64, penetration_depth: f64, conductivity: f64) -> Self {
        let (sinh, cosh) = (xi.sinh(), xi.cosh());
        let (sin, cos) = (xi.sin(), xi.cos());

        let z11 = Complex64::new(cosh * cos, sinh * sin);
        let z12 = Complex64::new(sinh * cos + cosh * sin, cosh * sin - sinh * cos)
            * (-penetration_depth / (2.0 * conductivity));
        let z21 = Complex64::new(sinh * cos - cosh * sin, sinh * cos + cosh * sin)
            * (-conductivity / penetration_depth);

        // Z22 equals Z11 for a homogeneous slab.
        Self {
            elements: [[z11, z12], [z21, z11]],
        }
    }

    /// Element Z11.
    #[must_use]
    pub fn z11(&self) -> Complex64 {
        self.elements[0][0]
    }

    /// Element Z12.
    #[must_use]
    pub fn z12(&self) -> Complex64 {
        self.elements[0][1]
    }

    /// Element Z21.
    #[must_use]
    pub fn z21(&self) -> Complex64 {
        self.elements[1][0]
    }

    /// Element Z22.
    #[must_use]
    pub fn z22(&self) -> Complex64 {
        self.elements[1][1]
    }

    /// The matrix determinant.
    #[must_use]
    pub fn determinant(&self) -> Complex64 {
        self.z11() * self.z22() - self.z12() * self.z21()
    }
}

impl Mul for HeatTransferMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = &self.elements;
        let b = &rhs.elements;
        Self {
            elements: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                ],
            ],
        }
    }
}

/// One heat transfer matrix per layer, in physical interior → exterior
/// order.
pub fn layer_matrices(
    layers: &[Layer],
    depths: &[Option<f64>],
    xis: &[Option<f64>],
    direction: HeatFlowDirection,
) -> Vec<HeatTransferMatrix> {
    layers
        .iter()
        .zip(depths.iter().copied().zip(xis.iter().copied()))
        .map(|(layer, (depth, xi))| match layer.kind() {
            LayerKind::Material { conductivity, .. } => {
                let depth = depth.expect("material layer always has a penetration depth");
                let xi = xi.expect("material layer always has a dimensionless ratio");
                HeatTransferMatrix::slab(xi, depth, conductivity.value)
            }
            LayerKind::Air => {
                HeatTransferMatrix::resistive(layer.thermal_resistance(direction).value)
            }
        })
        .collect()
}

/// Chains the layer matrices and brackets them with the surface films:
///
/// `Z = Z_se · (Z_N · … · Z_1) · Z_si`
///
/// where `matrices` is in physical interior → exterior order, `Z_1` is the
/// interior-most layer and `Z_N` the exterior-most. The multiplication
/// order is a correctness contract: swapping it yields a mathematically
/// valid matrix with the interior and exterior roles transposed.
pub fn assemble(
    matrices: &[HeatTransferMatrix],
    surfaces: SurfaceResistances,
) -> HeatTransferMatrix {
    let chained = matrices
        .iter()
        .rev()
        .copied()
        .fold(HeatTransferMatrix::identity(), |product, z| product * z);

    let interior_film = HeatTransferMatrix::resistive(surfaces.interior.value);
    let exterior_film = HeatTransferMatrix::resistive(surfaces.exterior.value);
    exterior_film * chained * interior_film
}
