//! Runtime report of compile-time reflection results for human inspection.
//!
//! Every number and name printed here was resolved during compilation; the
//! binary only reads the baked tables.

// Sample records are reflected, never constructed.
#![allow(dead_code)]

use struct_reflection::prelude::*;
use tracing::info;

#[derive(Introspect)]
struct SimpleRecord {
    pub id: i64,
    pub name: String,
    pub value: f64,
}

#[derive(Introspect)]
struct EmptyRecord {}

#[derive(Introspect)]
struct SingleMember {
    pub only_one: i64,
}

struct InnerData {
    pub inner_name: String,
    pub inner_id: i64,
}

#[derive(Introspect)]
struct NestedRecord {
    pub outer_name: String,
    pub nested: InnerData,
    pub score: f64,
}

#[derive(Introspect)]
struct MixedTypes {
    pub flag: bool,
    pub letter: char,
    pub small_num: i16,
    pub number: i32,
    pub big_num: i64,
    pub decimal: f32,
    pub precise: f64,
    pub text: String,
}

struct AlbumInfo {
    pub album: String,
}

#[derive(Introspect)]
struct MusicItem {
    pub title: String,
    pub artist: Vec<String>,
    pub duration: i64,
    pub metadata: AlbumInfo,
    pub size: i64,
}

#[derive(Introspect)]
struct ConstMembers {
    pub const_value: i64,
    pub pi: f64,
}

impl Default for ConstMembers {
    fn default() -> Self {
        Self { const_value: 42, pi: 3.14159 }
    }
}

fn print_reflection_info<T: Introspect>() {
    info!("========== {} ==========", type_name::<T>());
    info!("member count: {}", count_members::<T>());

    let names = get_names::<T>();
    if names.is_empty() {
        info!("  (no members)");
    } else {
        for (index, member_name) in names.iter().enumerate() {
            info!("  [{index}] {member_name}");
        }
    }
}

fn main() {
    // Initialize structured logging with env-based filter, defaulting to info
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    print_reflection_info::<SimpleRecord>();
    print_reflection_info::<EmptyRecord>();
    print_reflection_info::<SingleMember>();
    print_reflection_info::<NestedRecord>();
    print_reflection_info::<MixedTypes>();
    print_reflection_info::<MusicItem>();
    print_reflection_info::<ConstMembers>();

    info!("========== summary ==========");
    info!("records reported: 7");
    info!("every count and name above was resolved during compilation");
}
