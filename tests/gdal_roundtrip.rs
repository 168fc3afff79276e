// tests/gdal_roundtrip.rs
use gdal::raster::Buffer;
use gdal::{Dataset, DriverManager};
use std::path::Path;

use snow_mask::config::{ProcessorOptions, SnowConfig};
use snow_mask::io::{GdalSink, GdalSource, RasterSource};
use snow_mask::processing::{RasterProcessor, SnowDetector};
use snow_mask::SnowMaskError;

const TRANSFORM: [f64; 6] = [600000.0, 20.0, 0.0, 5100000.0, 0.0, -20.0];
const UTM_32N: &str = r#"PROJCS["WGS 84 / UTM zone 32N",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],PROJECTION["Transverse_Mercator"],PARAMETER["latitude_of_origin",0],PARAMETER["central_meridian",9],PARAMETER["scale_factor",0.9996],PARAMETER["false_easting",500000],PARAMETER["false_northing",0],UNIT["metre",1,AUTHORITY["EPSG","9001"]],AXIS["Easting",EAST],AXIS["Northing",NORTH],AUTHORITY["EPSG","32632"]]"#;

/// Write a float32 GeoTIFF with `band_count` bands; bands 3 and 11 get the given samples.
fn create_scene(
    path: &Path,
    size: (usize, usize),
    band_count: usize,
    green: &[f32],
    swir: &[f32],
) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut dataset = driver
        .create_with_band_type::<f32, _>(path, size.0, size.1, band_count)
        .unwrap();
    dataset.set_geo_transform(&TRANSFORM).unwrap();
    dataset.set_projection(UTM_32N).unwrap();

    for index in 1..=band_count {
        let data = match index {
            3 => green.to_vec(),
            11 => swir.to_vec(),
            _ => vec![0.1; size.0 * size.1],
        };
        let mut band = dataset.rasterband(index).unwrap();
        let mut buffer = Buffer::new(size, data);
        band.write((0, 0), size, &mut buffer).unwrap();
    }
    dataset.flush_cache().unwrap();
}

fn read_byte_band(dataset: &Dataset, index: usize) -> Vec<u8> {
    let band = dataset.rasterband(index).unwrap();
    let size = band.size();
    band.read_as::<u8>((0, 0), size, size, None)
        .unwrap()
        .data()
        .to_vec()
}

fn detector() -> SnowDetector {
    SnowDetector::new(SnowConfig::default(), ProcessorOptions::with_threads(Some(2))).unwrap()
}

#[test]
fn test_geotiff_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene.tif");
    let output = dir.path().join("snow.tif");

    // 3x2 scene: snow, non-snow, zero, threshold, snow, non-snow
    let green = [0.5, 0.2, 0.0, 7.0, 0.9, 0.1];
    let swir = [0.1, 0.3, 0.0, 3.0, 0.05, 0.1];
    create_scene(&input, (3, 2), 11, &green, &swir);

    let source = GdalSource::open(&input).unwrap();
    assert_eq!(source.band_count(), 11);
    let summary = detector()
        .process(&source, &GdalSink::new(), &output)
        .unwrap();
    let input_projection = source.projection();
    drop(source);
    assert!(input_projection.contains("UTM zone 32N"));

    assert_eq!(summary.snow_pixels, 2);
    assert_eq!(summary.non_snow_pixels, 4);

    let result = Dataset::open(&output).unwrap();
    assert_eq!(result.raster_count(), 3);
    assert_eq!(result.raster_size(), (3, 2));
    assert_eq!(result.geo_transform().unwrap(), TRANSFORM);
    let output_projection = result.projection();
    assert!(!output_projection.is_empty());
    assert_eq!(output_projection, input_projection);

    assert_eq!(read_byte_band(&result, 1), vec![0, 255, 255, 255, 0, 255]);
    assert_eq!(read_byte_band(&result, 2), vec![0; 6]);
    assert_eq!(read_byte_band(&result, 3), vec![255, 0, 0, 0, 255, 0]);
}

#[test]
fn test_unreadable_band_keeps_gdal_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene.tif");
    create_scene(&input, (2, 2), 11, &[0.5; 4], &[0.1; 4]);
    let source = GdalSource::open(&input).unwrap();

    let err = source.read_band(12, (2, 2)).unwrap_err();
    assert!(matches!(err, SnowMaskError::BandRead { band: 12, .. }));
    assert!(std::error::Error::source(&err).is_some());

    let err = source.band_size(0).unwrap_err();
    assert!(matches!(err, SnowMaskError::BandRead { band: 0, .. }));
}

#[test]
fn test_missing_input_is_source_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = GdalSource::open(dir.path().join("missing.tif"));
    assert!(matches!(result, Err(SnowMaskError::SourceOpen { .. })));
}

#[test]
fn test_too_few_bands_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rgb.tif");
    let output = dir.path().join("snow.tif");
    create_scene(&input, (2, 2), 4, &[0.5; 4], &[]);

    let source = GdalSource::open(&input).unwrap();
    let result = detector().process(&source, &GdalSink::new(), &output);

    assert!(matches!(
        result,
        Err(SnowMaskError::InsufficientBands {
            required: 11,
            available: 4
        })
    ));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_create_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene.tif");
    create_scene(&input, (1, 1), 11, &[0.5], &[0.1]);
    let source = GdalSource::open(&input).unwrap();

    let missing_dir = dir.path().join("no").join("such").join("dir").join("snow.tif");
    let result = detector().process(&source, &GdalSink::new(), &missing_dir);
    assert!(matches!(result, Err(SnowMaskError::OutputCreate { .. })));

    let bad_driver = dir.path().join("snow.tif");
    let result = detector().process(&source, &GdalSink::with_driver("NoSuchDriver"), &bad_driver);
    assert!(matches!(result, Err(SnowMaskError::OutputCreate { .. })));
    assert!(!bad_driver.exists());
}
