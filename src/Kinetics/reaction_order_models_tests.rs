/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::kinetics_error::KineticsError;
    use crate::Kinetics::reaction_order_models::{
        FirstOrderModel, KineticModel, KineticModelTrait, ReactionOrder, ReactionParameters,
        SecondOrderModel, ZerothOrderModel,
    };
    use approx::assert_relative_eq;

    fn all_models() -> Vec<KineticModel> {
        vec![
            ZerothOrderModel::new(1.0, 0.1).unwrap().into(),
            FirstOrderModel::new(1.0, 0.1).unwrap().into(),
            SecondOrderModel::new(1.0, 1.0, 0.1).unwrap().into(),
        ]
    }

    #[test]
    fn test_reaction_order_from_choice() {
        assert_eq!(ReactionOrder::from_choice(1).unwrap(), ReactionOrder::Zeroth);
        assert_eq!(ReactionOrder::from_choice(2).unwrap(), ReactionOrder::First);
        assert_eq!(ReactionOrder::from_choice(3).unwrap(), ReactionOrder::Second);
        for choice in [0, 4, -1, 100] {
            assert!(matches!(
                ReactionOrder::from_choice(choice),
                Err(KineticsError::InvalidSelection(_))
            ));
        }
        for order in ReactionOrder::ALL {
            assert_eq!(ReactionOrder::from_choice(order.menu_number()).unwrap(), order);
        }
    }

    #[test]
    fn test_zeroth_order_formula_is_exact() {
        let cases = [(1.0, 0.1), (2.5, 0.3), (0.7, 1.2), (5.0, 0.0)];
        let times = [0.0, 0.5, 1.0, 3.0, 7.25, 10.0];
        for (c0, k) in cases {
            let model = ZerothOrderModel::new(c0, k).unwrap();
            for t in times {
                assert_eq!(model.concentration_at(t).unwrap(), c0 - k * t);
            }
        }
    }

    #[test]
    fn test_zeroth_order_is_not_clamped() {
        let model = ZerothOrderModel::new(1.0, 0.1).unwrap();
        let c = model.concentration_at(20.0).unwrap();
        assert_relative_eq!(c, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_order_starts_at_c0_and_decreases() {
        for (c0, k) in [(1.0, 0.1), (3.0, 0.4), (0.2, 2.0)] {
            let model = FirstOrderModel::new(c0, k).unwrap();
            assert_eq!(model.concentration_at(0.0).unwrap(), c0);
            let mut previous = c0;
            for i in 1..50 {
                let c = model.concentration_at(i as f64 * 0.25).unwrap();
                assert!(c < previous, "not decreasing at step {}", i);
                assert!(c > 0.0);
                previous = c;
            }
        }
    }

    #[test]
    fn test_second_order_starts_at_c0_a() {
        for c0_a in [0.5, 1.0, 4.0] {
            let model = SecondOrderModel::new(c0_a, 7.0, 0.1).unwrap();
            assert_relative_eq!(model.concentration_at(0.0).unwrap(), c0_a, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_second_order_ignores_c0_b() {
        let a = SecondOrderModel::new(1.0, 1.0, 0.1).unwrap();
        let b = SecondOrderModel::new(1.0, 42.0, 0.1).unwrap();
        for t in [0.0, 1.0, 5.0, 10.0] {
            assert_eq!(a.concentration_at(t).unwrap(), b.concentration_at(t).unwrap());
        }
        assert_eq!(b.parameters().second_initial_concentration(), Some(42.0));
    }

    #[test]
    fn test_second_order_domain_errors() {
        // 1/C0_A + k*t = 1 - 0.5*2 = 0
        let model = SecondOrderModel::new(1.0, 1.0, -0.5).unwrap();
        assert!(matches!(
            model.concentration_at(2.0),
            Err(KineticsError::DomainError { .. })
        ));
        assert!(model.concentration_at(1.0).is_ok());
        assert!(matches!(
            model.sample(0.0, 10.0, 1.0),
            Err(KineticsError::DomainError { .. })
        ));

        let degenerate = SecondOrderModel::new(0.0, 1.0, 0.1).unwrap();
        assert!(matches!(
            degenerate.concentration_at(0.0),
            Err(KineticsError::DomainError { .. })
        ));
    }

    #[test]
    fn test_parameters_must_be_finite() {
        assert!(matches!(
            ZerothOrderModel::new(f64::NAN, 0.1),
            Err(KineticsError::InvalidParameter(_))
        ));
        assert!(matches!(
            FirstOrderModel::new(1.0, f64::INFINITY),
            Err(KineticsError::InvalidParameter(_))
        ));
        assert!(matches!(
            SecondOrderModel::new(1.0, f64::NEG_INFINITY, 0.1),
            Err(KineticsError::InvalidParameter(_))
        ));
        let params = ReactionParameters::new(0.1, 1.0).unwrap();
        assert_eq!(params.second_initial_concentration(), None);
    }

    #[test]
    fn test_sample_gives_eleven_points_for_every_order() {
        for model in all_models() {
            let series = model.sample(0.0, 10.0, 1.0).unwrap();
            assert_eq!(series.len(), 11, "{}", model.order());
            assert_eq!(
                series.times(),
                (0..=10).map(|i| i as f64).collect::<Vec<f64>>()
            );
        }
    }

    #[test]
    fn test_sample_rejects_non_positive_step() {
        for model in all_models() {
            for step in [0.0, -1.0] {
                assert!(matches!(
                    model.sample(0.0, 10.0, step),
                    Err(KineticsError::InvalidParameter(_))
                ));
            }
        }
    }

    #[test]
    fn test_lazy_sampler_matches_sample() {
        for model in all_models() {
            let lazy: Vec<(f64, f64)> = model
                .sampler(0.0, 10.0, 1.0)
                .unwrap()
                .map(|point| point.unwrap())
                .collect();
            let eager = model.sample(0.0, 10.0, 1.0).unwrap();
            assert_eq!(lazy.as_slice(), eager.points());
        }
    }

    #[test]
    fn test_zeroth_order_end_to_end() {
        let model: KineticModel = ZerothOrderModel::new(1.0, 0.1).unwrap().into();
        let series = model.sample(0.0, 10.0, 1.0).unwrap();
        assert_relative_eq!(series.value_at_time(0.0, 1e-9).unwrap(), 1.0);
        assert_relative_eq!(series.value_at_time(1.0, 1e-9).unwrap(), 0.9, epsilon = 1e-12);
        assert_relative_eq!(series.value_at_time(10.0, 1e-9).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_order_end_to_end() {
        let model: KineticModel = FirstOrderModel::new(1.0, 0.1).unwrap().into();
        let series = model.sample(0.0, 10.0, 1.0).unwrap();
        assert_eq!(series.first().unwrap(), (0.0, 1.0));
        assert_relative_eq!(series.last().unwrap().1, 0.3679, epsilon = 1e-4);
    }

    #[test]
    fn test_second_order_end_to_end() {
        let model: KineticModel = SecondOrderModel::new(1.0, 1.0, 0.1).unwrap().into();
        let series = model.sample(0.0, 10.0, 1.0).unwrap();
        assert_eq!(series.first().unwrap(), (0.0, 1.0));
        assert_relative_eq!(series.last().unwrap().1, 0.5, epsilon = 1e-12);
    }
}
