use rand::Rng;

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions and velocities
pub type Vector = bevy::math::DVec3;

/// Galaxy orientation.
///
/// The columns hold the basis the disk is laid out in: the first two span the
/// orbital plane and the third points out of it.
pub type Orientation = bevy::math::DMat3;

pub const TAU: Scalar = core::f64::consts::TAU;

/// Uniform angle in [0, 2π)
pub(crate) fn random_angle<R: Rng + ?Sized>(rng: &mut R) -> Scalar {
    TAU * rng.random::<Scalar>()
}

/// Builds an orientation from two independent uniform angles.
///
/// This is the composition of a tilt about x by `w1` and about y by `w2`,
/// so it only has two degrees of freedom.
pub(crate) fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    let w1 = random_angle(rng);
    let w2 = random_angle(rng);
    orientation_from_angles(w1, w2)
}

pub(crate) fn orientation_from_angles(w1: Scalar, w2: Scalar) -> Orientation {
    let (sin_w1, cos_w1) = (libm::sin(w1), libm::cos(w1));
    let (sin_w2, cos_w2) = (libm::sin(w2), libm::cos(w2));

    Orientation::from_cols(
        Vector::new(cos_w2, -sin_w1 * sin_w2, cos_w1 * sin_w2),
        Vector::new(0.0, cos_w1, sin_w1),
        Vector::new(-sin_w2, -sin_w1 * cos_w2, cos_w1 * cos_w2),
    )
}

/// Uniform vector with each component in [-1, 1)
pub(crate) fn random_unit_cube_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector {
    Vector::new(
        rng.random::<Scalar>() * 2.0 - 1.0,
        rng.random::<Scalar>() * 2.0 - 1.0,
        rng.random::<Scalar>() * 2.0 - 1.0,
    )
}
