/// Tag of the packed 4:2:2 encoding decoded to RGB during extraction.
pub const YUV422_COLORSPACE: i32 = 9;

/// Colorspace tags reported by the vision service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Luma channel only.
    Luma,
    Yuv422,
    Yuv,
    Rgb,
    Hsy,
    Bgr,
    /// 16-bit depth in millimetres.
    Depth,
    Argb,
    Infrared,
    Distance,
    RawDepth,
    Other(i32),
}

impl ColorSpace {
    pub fn from_tag(tag: i32) -> Self {
        match tag {
            0 => ColorSpace::Luma,
            YUV422_COLORSPACE => ColorSpace::Yuv422,
            10 => ColorSpace::Yuv,
            11 => ColorSpace::Rgb,
            12 => ColorSpace::Hsy,
            13 => ColorSpace::Bgr,
            17 => ColorSpace::Depth,
            18 => ColorSpace::Argb,
            20 => ColorSpace::Infrared,
            21 => ColorSpace::Distance,
            23 => ColorSpace::RawDepth,
            other => ColorSpace::Other(other),
        }
    }

    pub fn tag(self) -> i32 {
        match self {
            ColorSpace::Luma => 0,
            ColorSpace::Yuv422 => YUV422_COLORSPACE,
            ColorSpace::Yuv => 10,
            ColorSpace::Rgb => 11,
            ColorSpace::Hsy => 12,
            ColorSpace::Bgr => 13,
            ColorSpace::Depth => 17,
            ColorSpace::Argb => 18,
            ColorSpace::Infrared => 20,
            ColorSpace::Distance => 21,
            ColorSpace::RawDepth => 23,
            ColorSpace::Other(tag) => tag,
        }
    }

    /// Bytes per pixel of the raw buffer, `None` for unknown tags.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            ColorSpace::Luma => Some(1),
            ColorSpace::Yuv422
            | ColorSpace::Depth
            | ColorSpace::Infrared
            | ColorSpace::Distance
            | ColorSpace::RawDepth => Some(2),
            ColorSpace::Yuv | ColorSpace::Rgb | ColorSpace::Hsy | ColorSpace::Bgr => Some(3),
            ColorSpace::Argb => Some(4),
            ColorSpace::Other(_) => None,
        }
    }

    /// ROS-style encoding name of the raw buffer.
    pub fn encoding(self) -> Option<&'static str> {
        match self {
            ColorSpace::Luma => Some("mono8"),
            ColorSpace::Yuv422 => Some("yuv422"),
            ColorSpace::Rgb => Some("rgb8"),
            ColorSpace::Bgr => Some("bgr8"),
            ColorSpace::Depth | ColorSpace::Distance | ColorSpace::RawDepth => Some("16UC1"),
            ColorSpace::Infrared => Some("mono16"),
            ColorSpace::Argb => Some("8UC4"),
            ColorSpace::Yuv | ColorSpace::Hsy => Some("8UC3"),
            ColorSpace::Other(_) => None,
        }
    }
}

impl From<i32> for ColorSpace {
    fn from(tag: i32) -> Self {
        ColorSpace::from_tag(tag)
    }
}
