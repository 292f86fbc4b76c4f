//! Property-based tests for the curve group law and ECIES

use curvecrypt::algorithms::Error as PrimitiveError;
use curvecrypt::params::traditional::curves::{SECP256K1, TOY_CURVE_P97};
use curvecrypt::pke::Error as PkeError;
use curvecrypt::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn toy_curve() -> FiniteFieldCurve {
    FiniteFieldCurve::new(2u32.into(), 3u32.into(), 97u32.into()).unwrap()
}

/// Every affine point of y² = x³ + 2x + 3 over 𝔽₉₇
fn toy_points() -> Vec<Point> {
    let curve = toy_curve();
    let mut points = Vec::new();
    for x in 0u32..97 {
        for y in 0u32..97 {
            if curve.is_on_curve(&x.into(), &y.into()) {
                points.push(Point::affine(x, y));
            }
        }
    }
    points
}

fn is_two_torsion(point: &Point) -> bool {
    point.y().map_or(false, |y| *y == BigUint::from(0u32))
}

fn toy_point() -> impl Strategy<Value = Point> {
    prop::sample::select(toy_points())
}

proptest! {
    #[test]
    fn group_closure(p in toy_point(), q in toy_point()) {
        let curve = toy_curve();
        match curve.point_addition(&p, &q) {
            Ok(sum) => prop_assert!(curve.contains(&sum)),
            Err(err) => {
                // Only doubling a point with y = 0 is undefined
                prop_assert_eq!(err, PrimitiveError::ZeroDenominator { operation: "point doubling" });
                prop_assert!(p == q && is_two_torsion(&p));
            }
        }
    }

    #[test]
    fn group_identity_and_inverse(p in toy_point()) {
        let curve = toy_curve();
        prop_assert_eq!(curve.point_addition(&p, &Point::identity()).unwrap(), p.clone());
        prop_assert_eq!(curve.point_addition(&Point::identity(), &p).unwrap(), p.clone());

        prop_assume!(!is_two_torsion(&p));
        prop_assert!(curve.point_addition(&p, &curve.negate(&p)).unwrap().is_identity());
    }

    #[test]
    fn addition_commutes(p in toy_point(), q in toy_point()) {
        prop_assume!(p != q);
        let curve = toy_curve();
        prop_assert_eq!(
            curve.point_addition(&p, &q).unwrap(),
            curve.point_addition(&q, &p).unwrap()
        );
    }

    #[test]
    fn scalar_consistency(p in toy_point()) {
        let curve = toy_curve();
        prop_assert!(curve.scalar_multiplication(&0u32.into(), &p).unwrap().is_identity());
        prop_assert_eq!(curve.scalar_multiplication(&1u32.into(), &p).unwrap(), p.clone());

        prop_assume!(!is_two_torsion(&p));
        prop_assert_eq!(
            curve.scalar_multiplication(&2u32.into(), &p).unwrap(),
            curve.point_doubling(&p).unwrap()
        );
    }

    #[test]
    fn diffie_hellman_commutes_on_toy_curve(k in 1u32..5, d in 1u32..5) {
        let curve = toy_curve();
        let g = Point::affine(3u32, 6u32);
        let (k, d) = (BigUint::from(k), BigUint::from(d));

        let kd = curve.scalar_multiplication(&k, &curve.scalar_multiplication(&d, &g).unwrap()).unwrap();
        let dk = curve.scalar_multiplication(&d, &curve.scalar_multiplication(&k, &g).unwrap()).unwrap();
        prop_assert_eq!(kd, dk);
    }

    #[test]
    fn modular_inverse_prime_moduli(
        p in prop::sample::select(vec![97u64, 101, 7919, 65537, 2_147_483_647]),
        seed in any::<u64>()
    ) {
        let a = seed % (p - 1) + 1;
        let (a, p) = (BigUint::from(a), BigUint::from(p));
        let inv = mod_inverse(&a, &p).unwrap();
        prop_assert!(inv < p);
        prop_assert_eq!((a * inv) % &p, BigUint::from(1u32));
    }

    #[test]
    fn singular_parameters_are_rejected(t in 1u64..97) {
        // a = -3t², b = 2t³ makes 4a³ + 27b² vanish
        let p = 97u64;
        let a = (p - (3 * t * t) % p) % p;
        let b = (2 * t * t % p) * t % p;
        prop_assert_eq!(
            FiniteFieldCurve::new(a.into(), b.into(), p.into()),
            Err(PrimitiveError::SingularCurve)
        );
    }

    #[test]
    fn ecies_round_trip(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..200)) {
        let ecies = Ecies::from_params(&TOY_CURVE_P97).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (sk, pk) = ecies.key_generation(&mut rng).unwrap();
        let envelope = ecies.encrypt(&message, &pk, &mut rng).unwrap();
        prop_assert_eq!(ecies.decrypt(&envelope, &sk).unwrap(), message);
    }

    #[test]
    fn ecies_single_bit_tamper(seed in any::<u64>(), index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let ecies = Ecies::from_params(&TOY_CURVE_P97).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (sk, pk) = ecies.key_generation(&mut rng).unwrap();
        let mut bytes = ecies.encrypt(b"Hello, ECC!", &pk, &mut rng).unwrap().to_bytes();

        // IV occupies bytes 5..21 and the ciphertext 25..41 on the toy curve
        let targets: Vec<usize> = (5..21).chain(25..41).collect();
        bytes[*index.get(&targets)] ^= 1 << bit;

        let tampered = Envelope::from_bytes(&bytes).unwrap();
        prop_assert_eq!(ecies.decrypt(&tampered, &sk), Err(PkeError::AuthenticationFailed));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn diffie_hellman_commutes_on_secp256k1(k in 1u64..u64::MAX, d in 1u64..u64::MAX) {
        let ecies = Ecies::from_params(&SECP256K1).unwrap();
        let curve = ecies.domain().curve();
        let g = ecies.domain().generator();
        let (k, d) = (BigUint::from(k), BigUint::from(d));

        let kd = curve.scalar_multiplication(&k, &curve.scalar_multiplication(&d, g).unwrap()).unwrap();
        let dk = curve.scalar_multiplication(&d, &curve.scalar_multiplication(&k, g).unwrap()).unwrap();
        prop_assert_eq!(kd, dk);
    }
}
