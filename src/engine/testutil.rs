//! Shared fixtures for engine unit tests.

use crate::models::{Compute, Node, Service, Site, Storage, StorageArea};

/// Two-site document exercising every resource kind.
///
/// Site `AU-SITE1` (`s1`) owns one storage with one area; site `EU-SITE2`
/// (`s2`) owns two compute elements (one with services, one named only by
/// description) and a second storage.
pub fn sample_node() -> Node {
    Node {
        name: "AUSRC".to_string(),
        sites: vec![
            Site {
                id: "s1".to_string(),
                name: "AU-SITE1".to_string(),
                country: Some("AU".to_string()),
                storages: vec![Storage {
                    id: "st1".to_string(),
                    host: "storage.example.org".to_string(),
                    base_path: "/data".to_string(),
                    areas: vec![StorageArea {
                        id: "a1".to_string(),
                        name: "cache".to_string(),
                        kind: "disk".to_string(),
                        relative_path: Some("/cache".to_string()),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            },
            Site {
                id: "s2".to_string(),
                name: "EU-SITE2".to_string(),
                compute: vec![
                    Compute {
                        id: "c1".to_string(),
                        name: Some("gpu-cluster".to_string()),
                        associated_local_services: vec![Service {
                            id: "ls1".to_string(),
                            name: Some("dask".to_string()),
                            kind: Some("dask".to_string()),
                            host: Some("dask.example.org".to_string()),
                            ..Default::default()
                        }],
                        associated_global_services: vec![Service {
                            id: "gs1".to_string(),
                            name: Some("rucio".to_string()),
                            kind: Some("rucio".to_string()),
                            host: Some("rucio.example.org".to_string()),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                    Compute {
                        id: "c2".to_string(),
                        description: Some("general purpose batch".to_string()),
                        ..Default::default()
                    },
                ],
                storages: vec![Storage {
                    id: "st2".to_string(),
                    host: "disk.example.eu".to_string(),
                    areas: vec![StorageArea {
                        id: "a2".to_string(),
                        name: "staging".to_string(),
                        kind: "rse".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
