use serde_json::Value;

use waypath::current::{Anchor, WaypointId};

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn oldest_fixture_validates_against_its_declared_version() {
    let value = fixture(include_str!("data/old_v0_0_0.json"));
    assert!(waypath::validate(&value));
}

#[test]
fn oldest_fixture_migrates_to_a_valid_current_document() {
    let value = fixture(include_str!("data/old_v0_0_0.json"));
    let doc = waypath::open_document(&value).unwrap();

    assert_eq!(doc.paths.len(), 2);
    let taxi = &doc.paths["Taxi"];
    // xConstrained=true, yConstrained=false folds into a single flag.
    assert!(taxi.waypoints[0].translation_constrained);
    assert!(!taxi.waypoints[1].translation_constrained);
    // Pre-v0.1 trajectories are stale and reset on upgrade.
    assert_eq!(taxi.trajectory.as_deref(), Some(&[][..]));
    assert!(taxi.event_markers.is_empty());

    // Old wheel limits carry no gearing; upgraded configs get the defaults.
    assert_eq!(doc.robot_configuration.motor_max_velocity, 6000.0);
    assert_eq!(doc.robot_configuration.motor_max_torque, 1.162);
    assert_eq!(doc.robot_configuration.gearing, 6.75);

    // Mass and geometry pass through unchanged.
    assert_eq!(doc.robot_configuration.mass, 46.7);
    assert_eq!(doc.robot_configuration.wheel_radius, 0.0508);

    let saved = waypath::to_save_value(&doc).unwrap();
    assert_eq!(saved["version"], "v0.3");
    assert!(waypath::validate(&saved));
}

#[test]
fn loose_constraint_scopes_become_waypoint_id_lists() {
    let value = fixture(include_str!("data/loose_constraints_v0_1.json"));
    assert!(waypath::validate(&value));

    let doc = waypath::open_document(&value).unwrap();
    let constraints = &doc.paths["Center Line"].constraints;
    assert_eq!(constraints.len(), 4);

    assert_eq!(constraints[0].scope, vec![WaypointId::Index(1)]);
    assert_eq!(
        constraints[1].scope,
        vec![WaypointId::Index(0), WaypointId::Index(2)]
    );
    assert_eq!(constraints[2].scope, vec![WaypointId::Anchor(Anchor::First)]);
    assert!(constraints[3].scope.is_empty());

    // Constraint parameters ride along untouched.
    assert_eq!(constraints[1].kind, "MaxVelocity");
    assert_eq!(constraints[1].data["velocity"], 2.5);

    // v0.1 trajectories are already in the current sample shape and survive.
    let trajectory = doc.paths["Center Line"].trajectory.as_deref().unwrap();
    assert_eq!(trajectory.len(), 2);
    assert_eq!(trajectory[1].velocity_x, 2.0);
}

#[test]
fn validator_fails_closed_on_a_future_version() {
    let mut value = fixture(include_str!("data/old_v0_0_0.json"));
    value["version"] = Value::from("v7.0");
    assert!(!waypath::validate(&value));
    assert!(matches!(
        waypath::open_document(&value),
        Err(waypath::WaypathError::UnknownVersion(_))
    ));
}

#[test]
fn generated_names_file_covers_every_path() {
    let value = fixture(include_str!("data/old_v0_0_0.json"));
    let doc = waypath::open_document(&value).unwrap();
    let out = waypath::gen_traj_names_file(doc.paths.keys().map(String::as_str), "frc.robot");
    assert!(out.contains("public static final String Taxi = \"Taxi\";"));
    assert!(out.contains("public static final String TwoPiece = \"Two Piece\";"));
}
