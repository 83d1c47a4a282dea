//! ASCII PLY writing
//!
//! Emits the fixed vertex schema `{x, y, z}` plus optional
//! `{red, green, blue}` as an ASCII PLY stream. Color channels are
//! gamma-encoded on the way out; PLY viewers expect display-referred
//! values while the cloud carries linear-light channels.

use crate::error::Result;
use crate::PointCloudWriter;
use plycloud_core::{gamma_encode, PointCloud};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// How color channels are encoded in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorEncoding {
    /// `property uchar` channels, values 0-255
    #[default]
    IntegerChannel,
    /// `property float32` channels, values 0.0-1.0
    FloatChannel,
}

impl ColorEncoding {
    /// The PLY type token declared for color properties under this encoding
    pub fn property_type(&self) -> &'static str {
        match self {
            ColorEncoding::IntegerChannel => "uchar",
            ColorEncoding::FloatChannel => "float32",
        }
    }
}

/// Options controlling PLY output
#[derive(Debug, Clone, Default)]
pub struct PlyWriteOptions {
    pub encoding: ColorEncoding,
}

impl PlyWriteOptions {
    /// Options emitting `uchar` color channels
    pub fn integer_channel() -> Self {
        Self {
            encoding: ColorEncoding::IntegerChannel,
        }
    }

    /// Options emitting normalized `float32` color channels
    pub fn float_channel() -> Self {
        Self {
            encoding: ColorEncoding::FloatChannel,
        }
    }

    /// Set the color encoding
    pub fn with_encoding(mut self, encoding: ColorEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

pub struct PlyWriter;

impl PointCloudWriter for PlyWriter {
    /// Write a point cloud to `path` with default options
    fn write_point_cloud<P: AsRef<Path>>(cloud: &PointCloud, path: P) -> Result<bool> {
        Self::write_point_cloud_with(cloud, path, &PlyWriteOptions::default())
    }
}

impl PlyWriter {
    /// Write a point cloud to `path` with explicit options
    ///
    /// The destination file is created or truncated; nothing is appended.
    /// No temp-file rename is performed, so an interrupted write can leave
    /// a partial file behind.
    pub fn write_point_cloud_with<P: AsRef<Path>>(
        cloud: &PointCloud,
        path: P,
        options: &PlyWriteOptions,
    ) -> Result<bool> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let colors_written = Self::write(cloud, &mut writer, options)?;
        writer.flush()?;
        Ok(colors_written)
    }

    /// Write a point cloud to an arbitrary sink
    ///
    /// Colors are emitted exactly when the color sequence has the same
    /// length as the point sequence; any other length is silently omitted,
    /// never an error. All lines end in `\n` regardless of platform.
    pub fn write<W: Write>(
        cloud: &PointCloud,
        sink: &mut W,
        options: &PlyWriteOptions,
    ) -> Result<bool> {
        let colors_written = cloud.has_matching_colors();
        Self::write_header(sink, cloud.len(), colors_written, options.encoding)?;
        Self::write_body(sink, cloud, colors_written, options.encoding)?;
        Ok(colors_written)
    }

    fn write_header<W: Write>(
        sink: &mut W,
        vertex_count: usize,
        with_colors: bool,
        encoding: ColorEncoding,
    ) -> Result<()> {
        writeln!(sink, "ply")?;
        writeln!(sink, "format ascii 1.0")?;
        writeln!(sink, "element vertex {}", vertex_count)?;
        writeln!(sink, "property float32 x")?;
        writeln!(sink, "property float32 y")?;
        writeln!(sink, "property float32 z")?;
        if with_colors {
            let ty = encoding.property_type();
            writeln!(sink, "property {} red", ty)?;
            writeln!(sink, "property {} green", ty)?;
            writeln!(sink, "property {} blue", ty)?;
        }
        writeln!(sink, "end_header")?;
        Ok(())
    }

    fn write_body<W: Write>(
        sink: &mut W,
        cloud: &PointCloud,
        with_colors: bool,
        encoding: ColorEncoding,
    ) -> Result<()> {
        if with_colors {
            for (point, color) in cloud.iter().zip(cloud.colors()) {
                write!(sink, "{} {} {} ", point.x, point.y, point.z)?;
                let [r, g, b] = color.channels().map(gamma_encode);
                match encoding {
                    ColorEncoding::IntegerChannel => {
                        // Truncation toward zero, matching a direct cast
                        writeln!(sink, "{} {} {}", r as i32, g as i32, b as i32)?;
                    }
                    ColorEncoding::FloatChannel => {
                        writeln!(
                            sink,
                            "{} {} {}",
                            (r / 255.0) as f32,
                            (g / 255.0) as f32,
                            (b / 255.0) as f32
                        )?;
                    }
                }
            }
        } else {
            for point in cloud.iter() {
                writeln!(sink, "{} {} {}", point.x, point.y, point.z)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WriteError;
    use approx::assert_relative_eq;
    use plycloud_core::{Point3f, Rgb8};

    fn write_to_string(cloud: &PointCloud, options: &PlyWriteOptions) -> (String, bool) {
        let mut buf = Vec::new();
        let colors_written = PlyWriter::write(cloud, &mut buf, options).unwrap();
        (String::from_utf8(buf).unwrap(), colors_written)
    }

    #[test]
    fn header_without_colors_has_three_properties() {
        let cloud = PointCloud::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
        ]);
        let (out, colors_written) = write_to_string(&cloud, &PlyWriteOptions::default());
        assert!(!colors_written);
        assert!(out.contains("element vertex 2\n"));
        assert_eq!(out.matches("property ").count(), 3);
        assert!(!out.contains("red"));
    }

    #[test]
    fn header_with_integer_colors_declares_uchar() {
        let cloud = PointCloud::from_points_and_colors(
            vec![Point3f::new(0.0, 0.0, 0.0)],
            vec![Rgb8::new(1, 2, 3)],
        );
        let (out, colors_written) = write_to_string(&cloud, &PlyWriteOptions::integer_channel());
        assert!(colors_written);
        assert_eq!(out.matches("property ").count(), 6);
        assert!(out.contains("property uchar red\n"));
        assert!(out.contains("property uchar green\n"));
        assert!(out.contains("property uchar blue\n"));
    }

    #[test]
    fn header_with_float_colors_declares_float32() {
        let cloud = PointCloud::from_points_and_colors(
            vec![Point3f::new(0.0, 0.0, 0.0)],
            vec![Rgb8::new(1, 2, 3)],
        );
        let (out, _) = write_to_string(&cloud, &PlyWriteOptions::float_channel());
        assert!(out.contains("property float32 red\n"));
        assert!(out.contains("property float32 blue\n"));
    }

    #[test]
    fn header_lines_are_in_fixed_order() {
        let cloud = PointCloud::from_points_and_colors(
            vec![Point3f::new(0.0, 0.0, 0.0)],
            vec![Rgb8::new(0, 0, 0)],
        );
        let (out, _) = write_to_string(&cloud, &PlyWriteOptions::integer_channel());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            &lines[..10],
            &[
                "ply",
                "format ascii 1.0",
                "element vertex 1",
                "property float32 x",
                "property float32 y",
                "property float32 z",
                "property uchar red",
                "property uchar green",
                "property uchar blue",
                "end_header",
            ]
        );
    }

    #[test]
    fn body_line_count_matches_point_count() {
        let cloud = PointCloud::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 1.0),
            Point3f::new(2.0, 2.0, 2.0),
        ]);
        let (out, _) = write_to_string(&cloud, &PlyWriteOptions::default());
        let body: Vec<&str> = out
            .lines()
            .skip_while(|l| *l != "end_header")
            .skip(1)
            .collect();
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn mismatched_colors_are_omitted() {
        let cloud = PointCloud::from_points_and_colors(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(2.0, 0.0, 0.0),
            ],
            vec![Rgb8::new(255, 0, 0), Rgb8::new(0, 255, 0)],
        );
        let (out, colors_written) = write_to_string(&cloud, &PlyWriteOptions::default());
        assert!(!colors_written);
        assert_eq!(out.matches("property ").count(), 3);
        for line in out.lines().skip_while(|l| *l != "end_header").skip(1) {
            assert_eq!(line.split(' ').count(), 3);
        }
    }

    #[test]
    fn concrete_integer_channel_scenario() {
        // Gamma fixes 0 and 255, so primary colors survive verbatim
        let cloud = PointCloud::from_points_and_colors(
            vec![Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 2.0, 3.0)],
            vec![Rgb8::new(255, 0, 0), Rgb8::new(0, 255, 0)],
        );
        let (out, colors_written) = write_to_string(&cloud, &PlyWriteOptions::integer_channel());
        assert!(colors_written);
        assert!(out.contains("element vertex 2\n"));
        let body: Vec<&str> = out
            .lines()
            .skip_while(|l| *l != "end_header")
            .skip(1)
            .collect();
        assert_eq!(body, vec!["0 0 0 255 0 0", "1 2 3 0 255 0"]);
    }

    #[test]
    fn integer_channels_stay_within_byte_range() {
        let points: Vec<Point3f> = (0..=255).map(|i| Point3f::new(i as f32, 0.0, 0.0)).collect();
        let colors: Vec<Rgb8> = (0..=255).map(|i| Rgb8::new(i as u8, i as u8, i as u8)).collect();
        let cloud = PointCloud::from_points_and_colors(points, colors);
        let (out, _) = write_to_string(&cloud, &PlyWriteOptions::integer_channel());
        let mut prev = -1i32;
        for line in out.lines().skip_while(|l| *l != "end_header").skip(1) {
            let red: i32 = line.split(' ').nth(3).unwrap().parse().unwrap();
            assert!((0..=255).contains(&red));
            assert!(red >= prev, "channel values must be non-decreasing");
            prev = red;
        }
    }

    #[test]
    fn float_channels_are_normalized() {
        let cloud = PointCloud::from_points_and_colors(
            vec![Point3f::new(0.0, 0.0, 0.0); 3],
            vec![Rgb8::new(0, 0, 0), Rgb8::new(128, 128, 128), Rgb8::new(255, 255, 255)],
        );
        let (out, _) = write_to_string(&cloud, &PlyWriteOptions::float_channel());
        let body: Vec<&str> = out
            .lines()
            .skip_while(|l| *l != "end_header")
            .skip(1)
            .collect();
        for line in &body {
            let red: f32 = line.split(' ').nth(3).unwrap().parse().unwrap();
            assert!((0.0..=1.0).contains(&red));
        }
        assert!(body[0].ends_with("0 0 0"));
        assert!(body[2].ends_with("1 1 1"));

        // The midtone carries the gamma curve into the normalized range
        let mid: f32 = body[1].split(' ').nth(3).unwrap().parse().unwrap();
        assert_relative_eq!(mid, (gamma_encode(128) / 255.0) as f32);
    }

    #[test]
    fn empty_cloud_with_empty_colors_declares_color_properties() {
        // 0 == 0 satisfies the emission predicate
        let cloud = PointCloud::new();
        let (out, colors_written) = write_to_string(&cloud, &PlyWriteOptions::default());
        assert!(colors_written);
        assert!(out.contains("element vertex 0\n"));
        assert_eq!(out.matches("property ").count(), 6);
        assert!(out.ends_with("end_header\n"));
    }

    #[test]
    fn non_finite_coordinates_pass_through() {
        let cloud = PointCloud::from_points(vec![Point3f::new(f32::NAN, f32::INFINITY, 1.0)]);
        let (out, _) = write_to_string(&cloud, &PlyWriteOptions::default());
        let body = out.lines().last().unwrap();
        assert_eq!(body, "NaN inf 1");
    }

    #[test]
    fn write_to_bad_path_reports_sink_unavailable() {
        let cloud = PointCloud::from_points(vec![Point3f::new(0.0, 0.0, 0.0)]);
        let result = PlyWriter::write_point_cloud(&cloud, "no_such_dir/missing/out.ply");
        assert!(matches!(result, Err(WriteError::SinkUnavailable(_))));
    }
}
