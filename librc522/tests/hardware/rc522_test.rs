use librc522::card::layout::DATA_BLOCKS;
use librc522::types::{AuthMode, BlockData, Key, RequestMode, Status};
use librc522::BlockAddress;

use super::common::open_reader;

#[test]
#[ignore]
fn chip_version_is_known() -> anyhow::Result<()> {
    let mut dev = open_reader()?;
    let version = dev.version()?;
    assert!(matches!(version, 0x88 | 0x90 | 0x91 | 0x92), "version {version:#04x}");
    Ok(())
}

#[test]
#[ignore]
fn detect_and_round_trip_last_data_block() -> anyhow::Result<()> {
    let mut dev = open_reader()?;
    let card = dev.detect(RequestMode::Idle)?;
    let addr = BlockAddress::new(DATA_BLOCKS[DATA_BLOCKS.len() - 1])?;

    assert_eq!(
        card.authenticate(&mut dev, AuthMode::KeyA, addr, &Key::DEFAULT)?,
        Status::Ok
    );
    let original = card.read_block(&mut dev, addr)?.expect("block readable");
    let probe = BlockData::from_bytes(*b"librc522 hw test");
    assert_eq!(card.write_block(&mut dev, addr, &probe)?, Status::Ok);
    assert_eq!(card.read_block(&mut dev, addr)?, Some(probe));
    assert_eq!(card.write_block(&mut dev, addr, &original)?, Status::Ok);

    dev.stop_crypto1()?;
    Ok(())
}
