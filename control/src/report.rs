//! Decoded attribute reports arriving from the network stack.

/// Value of the multistate input cluster's present value attribute.
pub type SceneCode = u16;

/// One decoded attribute report of the remote.
///
/// The network stack decodes raw frames and hands over plain values. Raw
/// protocol decoding, endpoint binding and pairing all stay on its side
/// of the seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeReport {
    /// Scene attribute reported by the multistate input cluster.
    PresentValue(SceneCode),
    /// Manufacturer-specific periodic telemetry.
    Lifeline(Lifeline),
}

/// The manufacturer's lifeline telemetry.
///
/// The report carries a lot of data, of which only the battery voltage is
/// interesting here. The field may be missing or malformed in a report,
/// the decoder hands it over as `None` then.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lifeline {
    /// Battery voltage in millivolts.
    pub battery_voltage: Option<u16>,
}
