use pollinate_fpa::{FpaConfigBuilder, Function, PositionUpdate, flower_pollination};
use pollinate_testfunctions::{TestFunction, ackley, get_function_metadata, rastrigin, sphere};

#[test]
fn test_fpa_sphere_2d() {
    let f = Function::new("sphere", sphere);
    let b2 = vec![(-5.0, 5.0), (-5.0, 5.0)];
    let c2 = FpaConfigBuilder::new()
        .seed(30)
        .n_agents(30)
        .n_iterations(200)
        .position_update(PositionUpdate::Displace)
        .build();
    let report = flower_pollination(&f, &b2, c2).unwrap();
    assert!(report.fun < 0.5, "f = {}", report.fun);
}

#[test]
fn test_fpa_default_update_never_regresses() {
    let mk = |seed| FpaConfigBuilder::new().seed(seed).n_agents(25).n_iterations(80).build();
    for name in ["sphere", "rastrigin", "ackley"] {
        let meta = get_function_metadata(name).unwrap();
        let f = Function::new(meta.name, meta.function);
        let report = flower_pollination(&f, &meta.bounds(3), mk(40)).unwrap();
        let initial = report.history.records()[0].best_fit;
        assert!(report.fun <= initial, "{}: {} > {}", name, report.fun, initial);
        assert!(report.fun >= meta.global_minimum(3) - 1e-6);
    }
}

#[test]
fn test_fpa_multimodal_improves_with_displace() {
    let b3 = vec![(-5.12, 5.12); 3];
    let mk = |seed| {
        FpaConfigBuilder::new()
            .seed(seed)
            .n_agents(30)
            .n_iterations(150)
            .position_update(PositionUpdate::Displace)
            .build()
    };
    for (name, func) in [("rastrigin", rastrigin as TestFunction), ("ackley", ackley)] {
        let f = Function::new(name, func);
        let report = flower_pollination(&f, &b3, mk(50)).unwrap();
        let initial = report.history.records()[0].best_fit;
        assert!(report.fun < initial, "{} never improved on {}", name, initial);
    }
}
