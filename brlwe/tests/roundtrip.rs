use brlwe::vectors::{ENC2_A, ENC2_MESSAGE};
use brlwe::{
    Ciphertext, Error, KeyPair, LimitedSource, MulStrategy, Parameters, Poly, Report, Ring,
    Session, Source, count_errors, decrypt, encrypt, keygen,
};

#[test]
fn roundtrip_presets() {
    for params in [
        Parameters::ENC1,
        Parameters::ENC2,
        Parameters::ENC3,
        Parameters::ENCT,
        Parameters::NTT128,
        Parameters::NTT256,
    ] {
        sub_test(&format!("test_bit_accuracy::<{}>", params), || {
            test_bit_accuracy(params, 20)
        });
    }
}

#[test]
fn reference_vectors() {
    for seed in 0..4u8 {
        let mut session: Session =
            Session::with_public(Parameters::ENC2, &ENC2_A, [seed; 32]).unwrap();
        let report: Report = session.run(&ENC2_MESSAGE).unwrap();
        assert!(report.success(), "seed {}: {} errors", seed, report.errors);
    }
}

#[test]
fn strategies_agree_end_to_end() {
    let message: Vec<u8> = (0..256).map(|i| ((i * 7) % 5 < 2) as u8).collect();
    let run = |strategy: MulStrategy| {
        let ring: Ring = Ring::new(Parameters::new(256, 7681, strategy)).unwrap();
        let mut source: Source = Source::new([42u8; 32]);
        let mut a: Poly = ring.new_poly().unwrap();
        ring.fill_uniform(&mut source, &mut a).unwrap();
        let keys: KeyPair = keygen(&ring, &a, &mut source).unwrap();
        let ct: Ciphertext = encrypt(&ring, &a, &keys.public, &message, &mut source).unwrap();
        let recovered: Vec<u8> = decrypt(&ring, &ct, &keys.secret).unwrap();
        (keys.public, ct, recovered)
    };

    let reference = run(MulStrategy::Schoolbook);
    assert_eq!(reference.2, message);
    assert_eq!(run(MulStrategy::NttFull), reference);
    assert_eq!(run(MulStrategy::NttSplit), reference);
}

#[test]
fn error_taxonomy() {
    let ring: Ring = Ring::new(Parameters::ENC2).unwrap();
    let mut source: Source = Source::new([1u8; 32]);
    let a: Poly = ring.init_hex(&ENC2_A, false).unwrap();
    let keys: KeyPair = keygen(&ring, &a, &mut source).unwrap();

    sub_test("short_message", || {
        assert_eq!(
            encrypt(&ring, &a, &keys.public, &ENC2_MESSAGE[..255], &mut source),
            Err(Error::InvalidLength {
                expected: 256,
                actual: 255
            })
        );
    });

    sub_test("non_binary_message", || {
        let mut message: Vec<u8> = ENC2_MESSAGE.to_vec();
        message[17] = 2;
        assert_eq!(
            encrypt(&ring, &a, &keys.public, &message, &mut source),
            Err(Error::InvalidCoefficient {
                index: 17,
                value: 2
            })
        );
    });

    sub_test("exhausted_source", || {
        // e1 and e2 fit, e3 does not.
        let mut limited = LimitedSource::new(Source::new([2u8; 32]), 128);
        assert!(matches!(
            encrypt(&ring, &a, &keys.public, &ENC2_MESSAGE, &mut limited),
            Err(Error::RandomSourceExhausted(_))
        ));
    });

    sub_test("invalid_parameters", || {
        for params in [
            Parameters::new(96, 256, MulStrategy::Schoolbook),
            Parameters::new(256, 256, MulStrategy::NttFull),
            Parameters::new(4, 1, MulStrategy::Schoolbook),
            Parameters::new(256, 20000, MulStrategy::Schoolbook),
            Parameters::new(512, 7681, MulStrategy::NttFull),
        ] {
            assert!(
                matches!(Session::new(params, [0u8; 32]), Err(Error::InvalidParameters { .. })),
                "{} accepted",
                params
            );
        }
    });

    sub_test("count_errors_length", || {
        assert!(matches!(
            count_errors(&ring, &ENC2_MESSAGE, &ENC2_MESSAGE[..4]),
            Err(Error::InvalidLength { .. })
        ));
    });
}

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn test_bit_accuracy(params: Parameters, trials: usize) {
    let mut session: Session = Session::new(params, [params.n as u8 ^ params.q as u8; 32]).unwrap();
    let n: usize = session.ring().n();
    let mut errors: usize = 0;
    for _ in 0..trials {
        let mut message: Vec<u8> = vec![0u8; n];
        session.fill_message(&mut message).unwrap();
        errors += session.run(&message).unwrap().errors;
    }
    let total: usize = n * trials;
    assert!(
        errors * 100 <= total,
        "{}: {} of {} bits wrong",
        params,
        errors,
        total
    );
}
