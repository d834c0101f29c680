use std::io::Write;

use tracing::{debug, info};

use crate::cart_type::CartridgeType;
use crate::checksum::checksum;
use crate::config::ConvertConfig;
use crate::error::Result;
use crate::fixup::{self, FixupReport};
use crate::header::{CAR_HEADER_LEN, CarHeader};
use crate::image;

/// A finished CAR container: header plus (possibly patched) image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    header: CarHeader,
    image: Vec<u8>,
    /// Patches applied while building; empty for parsed containers.
    fixup: FixupReport,
}

/// Converts a raw ROM image into a CAR container.
///
/// Steps run strictly in order: size validation, type lookup, right-cartridge
/// fixup, checksum, header. Any failure returns before a container exists, so
/// callers never see a partially converted image.
pub fn convert(mut rom: Vec<u8>, config: &ConvertConfig) -> Result<Container> {
    let kib = image::validate_size(rom.len())?;
    let cart_type = CartridgeType::from_kib(kib)?;
    info!("{kib} KiB image, {cart_type}");

    debug!("rcfix: {}", config.fixup);
    let fixup = fixup::apply(&mut rom, config.fixup)?;

    let header = CarHeader::new(cart_type, checksum(&rom));
    debug!("checksum {:#010x}", header.checksum);

    Ok(Container {
        header,
        image: rom,
        fixup,
    })
}

impl Container {
    /// Splits an existing container into header and image.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let header = CarHeader::parse(bytes)?;
        Ok(Self {
            header,
            image: bytes[CAR_HEADER_LEN..].to_vec(),
            fixup: FixupReport::default(),
        })
    }

    pub fn header(&self) -> &CarHeader {
        &self.header
    }

    /// Image bytes as they follow the header, fixups included.
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn fixup(&self) -> &FixupReport {
        &self.fixup
    }

    pub fn into_image(self) -> Vec<u8> {
        self.image
    }

    pub fn cartridge_type(&self) -> Option<CartridgeType> {
        self.header.cartridge_type()
    }

    /// Whether the stored checksum matches the image bytes.
    pub fn verify_checksum(&self) -> bool {
        checksum(&self.image) == self.header.checksum
    }

    /// Total size of the encoded container.
    pub fn encoded_len(&self) -> usize {
        CAR_HEADER_LEN + self.image.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&self.image);
        out
    }

    /// Writes the encoded container in a single call.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixupMode;
    use crate::error::Error;

    #[test]
    fn output_is_header_then_image() {
        let mut rom = vec![0u8; 8 * 1024];
        rom[0] = 0x10;
        rom[0x1FFF] = 0x20;
        let car = convert(rom.clone(), &ConvertConfig::default()).unwrap();

        let bytes = car.to_bytes();
        assert_eq!(bytes.len(), CAR_HEADER_LEN + rom.len());
        assert_eq!(&bytes[..4], b"CART");
        assert_eq!(bytes[7], 1);
        assert_eq!(&bytes[8..12], &0x30u32.to_be_bytes());
        assert_eq!(&bytes[CAR_HEADER_LEN..], &rom[..]);
    }

    #[test]
    fn checksum_covers_patched_bytes() {
        let car = convert(vec![0u8; 16 * 1024], &ConvertConfig::new(FixupMode::Always)).unwrap();
        assert_eq!(car.header().checksum, 0xFF);
        assert_eq!(car.fixup().patched, vec![0x1FFC]);
        assert!(car.verify_checksum());
    }

    #[test]
    fn accessors_match_encoded_bytes() {
        let rom = vec![0x11u8; 16 * 1024];
        let car = convert(rom.clone(), &ConvertConfig::default()).unwrap();

        let bytes = car.to_bytes();
        assert_eq!(&bytes[..CAR_HEADER_LEN], &car.header().to_bytes());
        assert_eq!(&bytes[CAR_HEADER_LEN..], car.image());
        assert!(car.fixup().patched.is_empty());
        assert_eq!(car.encoded_len(), bytes.len());
        assert_eq!(car.into_image(), rom);
    }

    #[test]
    fn fixup_failure_produces_no_container() {
        let mut rom = vec![0u8; 16 * 1024];
        rom[0x1FF8] = 1;
        let err = convert(rom, &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, Error::FixupSafety { .. }));
    }

    #[test]
    fn write_to_emits_exact_bytes() {
        let car = convert(vec![0xEAu8; 32 * 1024], &ConvertConfig::default()).unwrap();
        let mut out = Vec::new();
        car.write_to(&mut out).unwrap();
        assert_eq!(out, car.to_bytes());
    }

    #[test]
    fn parse_detects_checksum_mismatch() {
        let car = convert(vec![7u8; 8 * 1024], &ConvertConfig::default()).unwrap();
        let mut bytes = car.to_bytes();
        bytes[CAR_HEADER_LEN] ^= 0xFF;

        let parsed = Container::parse(&bytes).unwrap();
        assert_eq!(parsed.cartridge_type(), car.cartridge_type());
        assert!(!parsed.verify_checksum());
    }
}
