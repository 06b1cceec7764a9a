//! Proptest strategies for historian models.
//!
//! Functions return strategies rather than implementing `Arbitrary` so that
//! integration tests can compose them freely. Generated values are always
//! valid against the wire contract.

use chrono::{DateTime, Utc};
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use std::collections::HashMap;

use crate::models::{
    ApplicationInfo, ApplicationRecord, ApplicationState, ApplicationType, DeleteEventsDetails,
    ReadValuesDetails, RegistryOperation, StatusResponse,
};

/// Timestamps between 2000 and 2100 with millisecond precision.
pub fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..4_102_444_800i64, 0u32..1000u32)
        .prop_filter_map("timestamp out of range", |(secs, millis)| {
            DateTime::from_timestamp(secs, millis * 1_000_000)
        })
}

pub fn application_state() -> impl Strategy<Value = ApplicationState> {
    prop::sample::select(ApplicationState::KNOWN)
}

pub fn application_type() -> impl Strategy<Value = ApplicationType> {
    prop::sample::select(ApplicationType::KNOWN)
}

fn short_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.:-]{1,24}"
}

fn string_map() -> impl Strategy<Value = HashMap<String, String>> {
    hash_map("[a-zA-Z@$][a-zA-Z0-9_]{0,12}", short_text(), 0..4)
}

pub fn registry_operation() -> impl Strategy<Value = RegistryOperation> {
    (short_text(), timestamp()).prop_map(|(authority_id, time)| RegistryOperation {
        authority_id,
        time,
    })
}

/// Application info with every optional field independently present or absent.
pub fn application_info() -> impl Strategy<Value = ApplicationInfo> {
    (
        (
            option::of(short_text()),
            option::of(application_type()),
            option::of("urn:[a-z]{3,10}:[a-z]{3,10}"),
            option::of(short_text()),
            option::of(short_text()),
            option::of("[a-z]{2}(-[A-Z]{2})?"),
        ),
        (
            option::of(string_map()),
            option::of(vec(any::<u8>(), 0..64)),
            option::of(vec(short_text(), 0..3)),
            option::of(vec("opc\\.tcp://[a-z]{3,8}:[0-9]{4}", 0..3)),
            option::of(timestamp()),
            option::of(registry_operation()),
        ),
        (
            option::of("http://opcfoundation\\.org/UA-Profile/[A-Za-z/]{3,20}"),
            option::of("urn:[a-z]{3,10}:gateway"),
            option::of(vec("10\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}", 0..3)),
            option::of("[a-z0-9-]{1,16}"),
            option::of("[a-z0-9-]{1,16}"),
            option::of(registry_operation()),
        ),
    )
        .prop_map(
            |(
                (application_id, application_type, application_uri, product_uri, application_name, locale),
                (localized_names, certificate, capabilities, discovery_urls, not_seen_since, created),
                (discovery_profile_uri, gateway_server_uri, host_addresses, site_id, supervisor_id, updated),
            )| ApplicationInfo {
                application_id,
                application_type,
                application_uri,
                product_uri,
                application_name,
                locale,
                localized_names,
                certificate,
                capabilities,
                discovery_urls,
                discovery_profile_uri,
                gateway_server_uri,
                host_addresses,
                site_id,
                supervisor_id,
                not_seen_since,
                created,
                updated,
            },
        )
}

pub fn application_record() -> impl Strategy<Value = ApplicationRecord> {
    (any::<i32>(), application_info()).prop_map(|(id, info)| ApplicationRecord::new(id, info))
}

pub fn delete_events_details() -> impl Strategy<Value = DeleteEventsDetails> {
    vec(vec(any::<u8>(), 0..32), 0..8).prop_map(|event_ids| DeleteEventsDetails { event_ids })
}

pub fn read_values_details() -> impl Strategy<Value = ReadValuesDetails> {
    (
        option::of(timestamp()),
        option::of(timestamp()),
        option::of(any::<u32>()),
        option::of(any::<bool>()),
    )
        .prop_map(
            |(start_time, end_time, num_values, return_bounds)| ReadValuesDetails {
                start_time,
                end_time,
                num_values,
                return_bounds,
            },
        )
}

/// Status as a server would report it, server-only fields included.
pub fn server_status_response() -> impl Strategy<Value = StatusResponse> {
    (
        (
            option::of(short_text()),
            option::of(short_text()),
            option::of(timestamp().prop_map(|t| t.to_rfc3339())),
            option::of(timestamp().prop_map(|t| t.to_rfc3339())),
            option::of(0i64..i64::MAX),
        ),
        (
            option::of("[a-f0-9]{32}"),
            option::of(string_map()),
            option::of(string_map()),
            option::of(string_map()),
        ),
    )
        .prop_map(
            |(
                (name, status, current_time, start_time, up_time),
                (uid, properties, dependencies, metadata),
            )| StatusResponse {
                name,
                status,
                current_time,
                start_time,
                up_time,
                uid,
                properties,
                dependencies,
                metadata,
            },
        )
}
