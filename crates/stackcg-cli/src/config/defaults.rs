/// Built-in 1U CubeSat scenario: payload on the floor, radio under the lid, power and
/// computer boards free to move. Masses in grams, lengths in millimeters.
pub const DEFAULT_SCENARIO_TOML: &str = r#"# stackcg scenario
total-height = 98.0

[target]
min = 40.0
max = 60.0

[distance-defaults]
min = 0.0
max = 9999.0

[search]
objective = "lowest"

[[elements]]
name = "PL"
mass = 100.0
thickness = 20.0
placement = "bottom"

[[elements]]
name = "EPS"
mass = 300.0
thickness = 20.0
placement = "movable"

[[elements]]
name = "OBC"
mass = 100.0
thickness = 15.0
placement = "movable"

[[elements]]
name = "RAD"
mass = 100.0
thickness = 15.0
placement = "top"

[[externals]]
name = "Solar Panel"
mass = 57.0
height = 105.0

[[externals]]
name = "Antenna"
mass = 90.0
height = 105.0

[[externals]]
name = "Chassis"
mass = 120.0
height = 48.0

# Per-pair bounds override the defaults above, e.g.
# [[distances]]
# pair = ["EPS", "OBC"]
# min = 5.0
# max = 50.0
"#;
