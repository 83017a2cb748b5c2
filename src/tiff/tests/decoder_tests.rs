//! Tests for the decoder

use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::tags;
use crate::tiff::decoder::{decode, ImageInfo};
use crate::tiff::encoder::Encoder;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::session::ComponentSwap;
use super::test_utils::{build_tiff, cursor, patch, pattern, replace_entry, standard_entries, RawEntry};

/// Decodes `bytes` and returns the image description with its full payload
fn decode_all(bytes: Vec<u8>) -> TiffResult<(ImageInfo, Vec<u8>)> {
    decode(&mut cursor(bytes), |info, pixels| {
        let mut data = vec![0u8; info.pixel_data_size().unwrap_or(0) as usize];
        pixels.read_bytes(&mut data)?;
        Ok((info, data))
    })
}

fn decode_with(entries: &[RawEntry], order: ByteOrder, pixels: &[u8]) -> TiffResult<(ImageInfo, Vec<u8>)> {
    decode_all(build_tiff(order, entries, 256, pixels))
}

fn assert_unsupported(result: TiffResult<(ImageInfo, Vec<u8>)>, expected_tag: u16, expected_value: u32) {
    match result {
        Err(TiffError::UnsupportedFeature { tag, value }) => {
            assert_eq!(tag, expected_tag);
            assert_eq!(value, expected_value);
        }
        other => panic!("expected UnsupportedFeature, got {:?}", other.map(|(info, _)| info)),
    }
}

#[test]
fn test_round_trip_all_formats() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        for bits in [8, 16, 32] {
            for components in [1, 3, 4] {
                let (width, height) = (5, 3);
                let data = pattern((width * height * components * bits / 8) as usize);
                let bytes = Encoder::new()
                    .with_byte_order(order)
                    .write_to(Vec::new(), width, height, components, bits, &data)
                    .unwrap();

                let (info, mut decoded) = decode_all(bytes).unwrap();
                assert_eq!(info.width, width);
                assert_eq!(info.height, height);
                assert_eq!(info.components, components);
                assert_eq!(info.bits_per_component, bits);
                assert_eq!(info.data_offset, 256);
                assert_eq!(info.total_bytes, data.len() as u32);
                assert_eq!(info.byte_order, order);
                assert_eq!(info.component_swap, ComponentSwap::None);
                assert_eq!(info.sample_byte_order(), order);
                if order == ByteOrder::native() || bits == 8 {
                    assert_eq!(decoded, data);
                }
                info.samples_to_native(&mut decoded);
                assert_eq!(decoded, data, "{:?} {} bits x {}", order, bits, components);
            }
        }
    }
}

#[test]
fn test_malformed_header_skips_callback() {
    let mut bytes = build_tiff(ByteOrder::LittleEndian, &standard_entries(2, 2, 1, 8, 256), 256, &[0; 4]);
    bytes[0] = b'X';

    let mut called = false;
    let result = decode(&mut cursor(bytes), |_, _| {
        called = true;
        Ok(())
    });
    assert!(matches!(result, Err(TiffError::InvalidHeader)));
    assert!(!called);
}

#[test]
fn test_rejected_directory_skips_callback() {
    let mut entries = standard_entries(2, 2, 1, 8, 256);
    replace_entry(&mut entries, tags::COMPRESSION, RawEntry::Long(tags::COMPRESSION, 5));
    let bytes = build_tiff(ByteOrder::LittleEndian, &entries, 256, &[0; 4]);

    let mut called = false;
    let result = decode(&mut cursor(bytes), |_, _| {
        called = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!called);
}

#[test]
fn test_compression_rejected() {
    let mut entries = standard_entries(2, 2, 1, 8, 256);
    replace_entry(&mut entries, tags::COMPRESSION, RawEntry::Long(tags::COMPRESSION, 5));
    assert_unsupported(decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]), tags::COMPRESSION, 5);
}

#[test]
fn test_rows_per_strip_after_height_rejected() {
    let mut entries = standard_entries(4, 4, 1, 8, 256);
    replace_entry(&mut entries, tags::ROWS_PER_STRIP, RawEntry::Long(tags::ROWS_PER_STRIP, 1));
    assert_unsupported(decode_with(&entries, ByteOrder::LittleEndian, &[0; 16]), tags::ROWS_PER_STRIP, 1);
}

#[test]
fn test_rows_per_strip_before_height_rejected() {
    let entries = vec![
        RawEntry::Long(tags::ROWS_PER_STRIP, 2),
        RawEntry::Long(tags::IMAGE_WIDTH, 4),
        RawEntry::Long(tags::IMAGE_LENGTH, 4),
        RawEntry::Long(tags::BITS_PER_SAMPLE, 8),
        RawEntry::Long(tags::STRIP_OFFSETS, 256),
        RawEntry::Long(tags::STRIP_BYTE_COUNTS, 16),
    ];
    assert_unsupported(decode_with(&entries, ByteOrder::LittleEndian, &[0; 16]), tags::ROWS_PER_STRIP, 2);
}

#[test]
fn test_rows_per_strip_before_matching_height_accepted() {
    let entries = vec![
        RawEntry::Long(tags::ROWS_PER_STRIP, 4),
        RawEntry::Long(tags::IMAGE_WIDTH, 4),
        RawEntry::Long(tags::IMAGE_LENGTH, 4),
        RawEntry::Long(tags::BITS_PER_SAMPLE, 8),
        RawEntry::Long(tags::STRIP_OFFSETS, 256),
        RawEntry::Long(tags::STRIP_BYTE_COUNTS, 16),
    ];
    let (info, data) = decode_with(&entries, ByteOrder::LittleEndian, &pattern(16)).unwrap();
    assert_eq!(info.components, 1);
    assert_eq!(data, pattern(16));
}

#[test]
fn test_planar_configuration_rejected() {
    let mut entries = standard_entries(2, 2, 3, 8, 256);
    entries.push(RawEntry::Long(tags::PLANAR_CONFIGURATION, 2));
    assert_unsupported(decode_with(&entries, ByteOrder::LittleEndian, &[0; 12]), tags::PLANAR_CONFIGURATION, 2);

    let mut entries = standard_entries(2, 2, 3, 8, 256);
    entries.push(RawEntry::Long(tags::PLANAR_CONFIGURATION, 1));
    assert!(decode_with(&entries, ByteOrder::LittleEndian, &[0; 12]).is_ok());
}

#[test]
fn test_photometric_rejected() {
    let mut entries = standard_entries(2, 2, 1, 8, 256);
    replace_entry(&mut entries, tags::PHOTOMETRIC_INTERPRETATION, RawEntry::Long(tags::PHOTOMETRIC_INTERPRETATION, 3));
    assert_unsupported(
        decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]),
        tags::PHOTOMETRIC_INTERPRETATION,
        3,
    );
}

#[test]
fn test_reduced_resolution_subfile_rejected() {
    let mut entries = standard_entries(2, 2, 1, 8, 256);
    replace_entry(&mut entries, tags::NEW_SUBFILE_TYPE, RawEntry::Long(tags::NEW_SUBFILE_TYPE, 1));
    assert_unsupported(decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]), tags::NEW_SUBFILE_TYPE, 1);
}

#[test]
fn test_indirect_bits_per_sample() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let mut entries = standard_entries(2, 2, 3, 16, 256);
        replace_entry(&mut entries, tags::BITS_PER_SAMPLE, RawEntry::ShortArray(tags::BITS_PER_SAMPLE, 3, 200));

        let data = pattern(24);
        let mut bytes = build_tiff(order, &entries, 256, &data);
        let depths: &[u8] = match order {
            ByteOrder::LittleEndian => &[16, 0, 16, 0, 16, 0],
            ByteOrder::BigEndian => &[0, 16, 0, 16, 0, 16],
        };
        patch(&mut bytes, 200, depths);

        let (info, decoded) = decode_all(bytes).unwrap();
        assert_eq!(info.bits_per_component, 16);
        assert_eq!(decoded, data);
    }
}

#[test]
fn test_indirect_bits_per_sample_invalid_value() {
    let mut entries = standard_entries(2, 2, 3, 8, 256);
    replace_entry(&mut entries, tags::BITS_PER_SAMPLE, RawEntry::ShortArray(tags::BITS_PER_SAMPLE, 3, 200));
    let mut bytes = build_tiff(ByteOrder::LittleEndian, &entries, 256, &[0; 12]);
    patch(&mut bytes, 200, &[12, 0, 12, 0, 12, 0]);

    assert!(matches!(decode_all(bytes), Err(TiffError::UnresolvedBitDepth(12))));
}

#[test]
fn test_indirect_bits_per_sample_beyond_end() {
    let mut entries = standard_entries(2, 2, 3, 8, 256);
    replace_entry(&mut entries, tags::BITS_PER_SAMPLE, RawEntry::ShortArray(tags::BITS_PER_SAMPLE, 3, 0x0001_0000));
    let bytes = build_tiff(ByteOrder::LittleEndian, &entries, 256, &[0; 12]);

    assert!(matches!(decode_all(bytes), Err(TiffError::UnresolvedBitDepth(0x0001_0000))));
}

#[test]
fn test_unknown_tags_tolerated() {
    let mut entries = standard_entries(3, 2, 1, 8, 256);
    entries.insert(2, RawEntry::Long(0xC4A5, 77));
    entries.push(RawEntry::Long(tags::X_RESOLUTION, 180));
    entries.push(RawEntry::Long(tags::SOFTWARE, 220));

    let (info, data) = decode_with(&entries, ByteOrder::BigEndian, &pattern(6)).unwrap();
    assert_eq!((info.width, info.height), (3, 2));
    assert_eq!(data, pattern(6));
}

#[test]
fn test_missing_width_is_incomplete() {
    let entries: Vec<RawEntry> = standard_entries(2, 2, 1, 8, 256)
        .into_iter()
        .filter(|e| !matches!(e, RawEntry::Long(tag, _) if *tag == tags::IMAGE_WIDTH))
        .collect();

    match decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]) {
        Err(TiffError::IncompleteDirectory { width, height, .. }) => {
            assert_eq!(width, 0);
            assert_eq!(height, 2);
        }
        other => panic!("expected IncompleteDirectory, got {:?}", other.map(|(info, _)| info)),
    }
}

#[test]
fn test_missing_data_offset_is_incomplete() {
    let entries: Vec<RawEntry> = standard_entries(2, 2, 1, 8, 256)
        .into_iter()
        .filter(|e| !matches!(e, RawEntry::Long(tag, _) if *tag == tags::STRIP_OFFSETS))
        .collect();

    assert!(matches!(
        decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]),
        Err(TiffError::IncompleteDirectory { data_offset: None, .. })
    ));
}

#[test]
fn test_missing_byte_count_is_incomplete() {
    let entries: Vec<RawEntry> = standard_entries(2, 2, 1, 8, 256)
        .into_iter()
        .filter(|e| !matches!(e, RawEntry::Long(tag, _) if *tag == tags::STRIP_BYTE_COUNTS))
        .collect();

    assert!(matches!(
        decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]),
        Err(TiffError::IncompleteDirectory { total_bytes: 0, data_offset: Some(256), .. })
    ));
}

#[test]
fn test_fill_order_swaps_16_bit() {
    let mut entries = standard_entries(2, 1, 1, 16, 256);
    entries.push(RawEntry::Short(tags::FILL_ORDER, 1));

    let (info, data) = decode_with(&entries, ByteOrder::LittleEndian, &[1, 2, 3, 4]).unwrap();
    assert_eq!(info.component_swap, ComponentSwap::Swap16);
    assert_eq!(info.sample_byte_order(), ByteOrder::BigEndian);
    assert_eq!(data, vec![2, 1, 4, 3]);
}

#[test]
fn test_fill_order_swaps_32_bit() {
    let mut entries = standard_entries(2, 1, 1, 32, 256);
    entries.push(RawEntry::Short(tags::FILL_ORDER, 1));

    let (info, data) = decode_with(&entries, ByteOrder::BigEndian, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(info.component_swap, ComponentSwap::Swap32);
    assert_eq!(info.sample_byte_order(), ByteOrder::LittleEndian);
    assert_eq!(data, vec![4, 3, 2, 1, 8, 7, 6, 5]);
}

#[test]
fn test_fill_order_leaves_8_bit() {
    let mut entries = standard_entries(4, 1, 1, 8, 256);
    entries.push(RawEntry::Short(tags::FILL_ORDER, 1));

    let (info, data) = decode_with(&entries, ByteOrder::LittleEndian, &[1, 2, 3, 4]).unwrap();
    assert_eq!(info.component_swap, ComponentSwap::None);
    assert_eq!(data, vec![1, 2, 3, 4]);
}

#[test]
fn test_fill_order_two_is_not_a_swap() {
    let mut entries = standard_entries(2, 1, 1, 16, 256);
    entries.push(RawEntry::Short(tags::FILL_ORDER, 2));

    let (info, data) = decode_with(&entries, ByteOrder::LittleEndian, &[1, 2, 3, 4]).unwrap();
    assert_eq!(info.component_swap, ComponentSwap::None);
    assert_eq!(info.sample_byte_order(), ByteOrder::LittleEndian);
    assert_eq!(data, vec![1, 2, 3, 4]);
}

#[test]
fn test_samples_to_native_undoes_fill_order_swap() {
    let value: u16 = 0x0102;
    let order = ByteOrder::native();
    let mut entries = standard_entries(1, 1, 1, 16, 256);
    entries.push(RawEntry::Short(tags::FILL_ORDER, 1));

    let (info, mut data) = decode_with(&entries, order, &value.to_ne_bytes()).unwrap();
    assert_ne!(info.sample_byte_order(), order);
    info.samples_to_native(&mut data);
    assert_eq!(u16::from_ne_bytes([data[0], data[1]]), value);
}

#[test]
fn test_callback_result_is_returned() {
    let bytes = build_tiff(ByteOrder::LittleEndian, &standard_entries(2, 2, 1, 8, 256), 256, &pattern(4));
    let result = decode(&mut cursor(bytes), |info, _| Ok(info.width * 100 + info.height));
    assert_eq!(result.unwrap(), 202);
}

#[test]
fn test_callback_error_is_returned() {
    let bytes = build_tiff(ByteOrder::LittleEndian, &standard_entries(2, 2, 1, 8, 256), 256, &pattern(4));
    let result: TiffResult<()> = decode(&mut cursor(bytes), |_, _| {
        Err(TiffError::GenericError("stop".to_string()))
    });
    assert!(matches!(result, Err(TiffError::GenericError(msg)) if msg == "stop"));
}

#[test]
fn test_partial_reads() {
    let data = pattern(12);
    let bytes = build_tiff(ByteOrder::LittleEndian, &standard_entries(2, 2, 3, 8, 256), 256, &data);

    let rows = decode(&mut cursor(bytes), |info, pixels| {
        let row_len = (info.width * info.components) as usize;
        let mut first = vec![0u8; row_len];
        let mut second = vec![0u8; row_len];
        pixels.read_bytes(&mut first)?;
        pixels.read_bytes(&mut second)?;
        assert_eq!(pixels.bytes_read(), 12);
        Ok((first, second))
    })
    .unwrap();

    assert_eq!(rows.0, data[..6].to_vec());
    assert_eq!(rows.1, data[6..].to_vec());
}

#[test]
fn test_truncated_payload() {
    let bytes = build_tiff(ByteOrder::LittleEndian, &standard_entries(4, 4, 1, 8, 256), 256, &[0; 10]);
    assert!(matches!(decode_all(bytes), Err(TiffError::ShortRead)));
}

#[test]
fn test_nonstandard_data_offset() {
    let data = pattern(8);
    let bytes = build_tiff(ByteOrder::BigEndian, &standard_entries(2, 2, 1, 16, 400), 400, &data);

    let (info, decoded) = decode_all(bytes).unwrap();
    assert_eq!(info.data_offset, 400);
    assert_eq!(decoded, data);
}

#[test]
fn test_short_fields_big_endian() {
    let entries = vec![
        RawEntry::Short(tags::IMAGE_WIDTH, 3),
        RawEntry::Short(tags::IMAGE_LENGTH, 2),
        RawEntry::Short(tags::BITS_PER_SAMPLE, 16),
        RawEntry::Short(tags::COMPRESSION, 1),
        RawEntry::Short(tags::PHOTOMETRIC_INTERPRETATION, 1),
        RawEntry::Long(tags::STRIP_OFFSETS, 256),
        RawEntry::Short(tags::SAMPLES_PER_PIXEL, 1),
        RawEntry::Short(tags::ROWS_PER_STRIP, 2),
        RawEntry::Long(tags::STRIP_BYTE_COUNTS, 12),
        RawEntry::Short(tags::PLANAR_CONFIGURATION, 1),
    ];
    let data = pattern(12);

    let (info, decoded) = decode_with(&entries, ByteOrder::BigEndian, &data).unwrap();
    assert_eq!((info.width, info.height), (3, 2));
    assert_eq!(info.bits_per_component, 16);
    assert_eq!(decoded, data);
}

#[test]
fn test_samples_per_pixel_defaults_to_one() {
    let entries: Vec<RawEntry> = standard_entries(2, 2, 1, 8, 256)
        .into_iter()
        .filter(|e| !matches!(e, RawEntry::Long(tag, _) if *tag == tags::SAMPLES_PER_PIXEL))
        .collect();

    let (info, _) = decode_with(&entries, ByteOrder::LittleEndian, &[0; 4]).unwrap();
    assert_eq!(info.components, 1);
}
