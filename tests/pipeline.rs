// End-to-end render cycles over on-disk inputs:
//   CSV loading, GeoJSON polygons, region filtering, cascade, slice, join, and export.

use std::fs;

use accessmap::{
    days, hours, select_slice, weeks, AccessMap, CycleOutcome, GeographyLayer, RegionSet, Resolved,
    Scalar, ScoreRange, ScoreTable, SelectionState, SvgOptions,
};

const SCORES: &str = "GEOID,week,day,hour,Access_Score\n\
    A,1,Mon,08:00–08:59,10\n\
    A,1,Mon,09:00–09:59,20\n";

fn square(id: &str, county: &str, x0: f64) -> String {
    format!(
        r#"{{"type":"Feature","properties":{{"GEOID":"{id}","NAMELSADCO":"{county}"}},
            "geometry":{{"type":"Polygon","coordinates":[[[{x0},0],[{x1},0],[{x1},1],[{x0},1],[{x0},0]]]}}}}"#,
        x1 = x0 + 1.0,
    )
}

fn tracts() -> String {
    format!(
        r#"{{"type":"FeatureCollection","features":[{},{},{}]}}"#,
        square("A", "Wake County", 0.0),
        square("B", "Wake County", 1.0),
        square("C", "Mecklenburg County", 2.0),
    )
}

fn load(scores: &str) -> (tempfile::TempDir, AccessMap) {
    let dir = tempfile::tempdir().unwrap();
    let scores_path = dir.path().join("scores.csv");
    let tracts_path = dir.path().join("tracts.geojson");
    fs::write(&scores_path, scores).unwrap();
    fs::write(&tracts_path, tracts()).unwrap();

    let map = AccessMap::load(&scores_path, &tracts_path, &RegionSet::default()).unwrap();
    (dir, map)
}

#[test]
fn single_row_slice_joins_and_widens() {
    let (_dir, map) = load(SCORES);
    assert_eq!(map.geographies().len(), 2);

    let Resolved::Ready(selection) = map.resolve("1", "Mon", Some(8)).unwrap() else {
        panic!("expected hours for Monday");
    };
    let CycleOutcome::Rendered(choropleth) = map.render_cycle(&selection) else {
        panic!("expected a rendered frame");
    };

    let rows: Vec<(&str, f64)> = choropleth.frame.iter()
        .map(|r| (r.polygon.geo_id.id(), r.access_score))
        .collect();
    assert_eq!(rows, vec![("A", 10.0), ("B", 0.0)]);
    assert_eq!(choropleth.range, ScoreRange { vmin: 9.0, vmax: 11.0 });
}

#[test]
fn rendered_outputs_land_on_disk() {
    let (dir, map) = load(SCORES);
    let selection = SelectionState::new(Scalar::Int(1), Scalar::from("Mon"), 9);
    let CycleOutcome::Rendered(choropleth) = map.render_cycle(&selection) else {
        panic!("expected a rendered frame");
    };

    let svg = dir.path().join("out/map.svg");
    choropleth.to_svg(&svg, &SvgOptions::default(), false).unwrap();
    let text = fs::read_to_string(&svg).unwrap();
    assert_eq!(text.matches("<path ").count(), 2);
    assert!(text.contains("week 1, Mon, hour 9"));

    let geojson = dir.path().join("out/map.geojson");
    choropleth.to_geojson(&geojson, false).unwrap();
    let layer = GeographyLayer::read(&geojson).unwrap();
    assert_eq!(layer.len(), 2);

    assert!(choropleth.to_svg(&svg, &SvgOptions::default(), false).is_err());
    choropleth.to_svg(&svg, &SvgOptions::default(), true).unwrap();
}

#[test]
fn leading_zero_ids_survive_csv_loading_and_join() {
    let scores = "GEOID,week,day,hour,Access_Score\n\
        01001020100,1,Mon,08:00–08:59,4.5\n";
    let table = ScoreTable::from_csv_bytes(scores.as_bytes()).unwrap();
    assert_eq!(table.records()[0].geo_id().id(), "01001020100");

    let polygons = GeographyLayer::from_geojson_bytes(format!(
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        square("01001020100", "Wake County", 0.0),
    ).as_bytes()).unwrap();
    let map = AccessMap::new(table, polygons, &RegionSet::default());

    let CycleOutcome::Rendered(choropleth) = map.render_cycle(&SelectionState::new(Scalar::Int(1), "Mon".into(), 8)) else {
        panic!("expected a rendered frame");
    };
    assert!(choropleth.frame.rows()[0].matched);
    assert_eq!(choropleth.frame.rows()[0].access_score, 4.5);
}

#[test]
fn cascade_hours_agree_with_slices() {
    let scores = "GEOID,week,day,hour,Access_Score\n\
        A,2,Tue,09:00–09:59,1\n\
        B,2,Tue,11:00–11:59,2\n\
        A,2,Wed,bad label,3\n\
        A,10,Mon,07:00–07:59,4\n\
        A,,Mon,07:00–07:59,5\n";
    let table = ScoreTable::from_csv_bytes(scores.as_bytes()).unwrap();

    let all_weeks = weeks(&table);
    assert_eq!(all_weeks, vec![Scalar::Int(2), Scalar::Int(10)]);

    for week in &all_weeks {
        for day in days(&table, week) {
            let observed = hours(&table, week, &day);
            let slices_with_rows = (0..24)
                .filter(|&h| !select_slice(&table, week, &day, h).is_empty())
                .collect::<Vec<_>>();
            assert_eq!(observed, slices_with_rows, "week {week} day {day}");
        }
    }
}

#[test]
fn day_without_hours_halts_without_error() {
    let scores = "GEOID,week,day,hour,Access_Score\n\
        A,1,Mon,08:00–08:59,10\n\
        A,1,Sat,,3\n";
    let (_dir, map) = load(scores);

    assert!(matches!(map.resolve("1", "Sat", None).unwrap(), Resolved::NoHours { .. }));
    let outcome = map.render_cycle(&SelectionState::new(Scalar::Int(1), "Sat".into(), 8));
    assert_eq!(outcome.advisory(), Some("No data available for this day."));

    // The loaded state is untouched by the halted cycle.
    assert!(matches!(map.render_cycle(&SelectionState::new(Scalar::Int(1), "Mon".into(), 8)), CycleOutcome::Rendered(_)));
}

#[test]
fn missing_polygon_attribute_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let scores_path = dir.path().join("scores.csv");
    let tracts_path = dir.path().join("tracts.geojson");
    fs::write(&scores_path, SCORES).unwrap();
    fs::write(&tracts_path, r#"{"type":"FeatureCollection","features":[{"type":"Feature",
        "properties":{"NAMELSADCO":"Wake County"},
        "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}]}"#).unwrap();

    let err = AccessMap::load(&scores_path, &tracts_path, &RegionSet::default()).unwrap_err();
    assert!(format!("{err:#}").contains("GEOID"));
}
