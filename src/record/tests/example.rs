use crate::errors::RecordError;
use crate::record::{Example, Feature, FeatureKind, Features};

fn sample_features() -> Features {
    [
        ("bytes", Feature::bytes(vec![vec![1, 2, 3], vec![]])),
        ("ints", Feature::int64(vec![-1, 0, i64::MAX])),
        ("floats", Feature::float(vec![0.5, -2.25])),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_feature_kind_and_len() {
    let bytes = Feature::bytes(vec![vec![0u8; 784]]);
    assert_eq!(bytes.kind(), FeatureKind::Bytes);
    // 字节串列表的长度是字节串个数，不是总字节数
    assert_eq!(bytes.len(), 1);

    let ints = Feature::int64(vec![1, 2, 3]);
    assert_eq!(ints.kind(), FeatureKind::Int64);
    assert_eq!(ints.len(), 3);
    assert_eq!(ints.as_int64_list(), Some(&[1, 2, 3][..]));
    assert_eq!(ints.as_bytes_list(), None);

    let floats = Feature::float(vec![]);
    assert_eq!(floats.kind(), FeatureKind::Float);
    assert!(floats.is_empty());
}

#[test]
fn test_features_insert_replaces_same_name() {
    let mut features = Features::new();
    assert!(features.is_empty());
    assert_eq!(features.insert("label", Feature::int64(vec![1])), None);
    let old = features.insert("label", Feature::int64(vec![2]));
    assert_eq!(old, Some(Feature::int64(vec![1])));
    assert_eq!(features.len(), 1);
    assert_eq!(features.get("label"), Some(&Feature::int64(vec![2])));
}

#[test]
fn test_features_names_are_sorted() {
    let features = sample_features();
    let names: Vec<&str> = features.names().collect();
    assert_eq!(names, vec!["bytes", "floats", "ints"]);
}

#[test]
fn test_example_bytes_round_trip() {
    let example = Example::new(sample_features());
    let bytes = example.to_bytes().unwrap();
    let restored = Example::from_bytes(&bytes).unwrap();
    assert_eq!(restored, example);
}

#[test]
fn test_example_serialization_ignores_insert_order() {
    let mut a = Features::new();
    a.insert("x", Feature::int64(vec![1]));
    a.insert("y", Feature::int64(vec![2]));
    let mut b = Features::new();
    b.insert("y", Feature::int64(vec![2]));
    b.insert("x", Feature::int64(vec![1]));

    assert_eq!(
        Example::new(a).to_bytes().unwrap(),
        Example::new(b).to_bytes().unwrap()
    );
}

#[test]
fn test_empty_example_round_trip() {
    let bytes = Example::default().to_bytes().unwrap();
    let restored = Example::from_bytes(&bytes).unwrap();
    assert!(restored.features().is_empty());
}

#[test]
fn test_from_bytes_rejects_truncated_input() {
    let bytes = Example::new(sample_features()).to_bytes().unwrap();
    let result = Example::from_bytes(&bytes[..bytes.len() - 1]);
    assert!(matches!(result, Err(RecordError::Malformed(_))));
}

#[test]
fn test_from_bytes_rejects_trailing_bytes() {
    let mut bytes = Example::new(sample_features()).to_bytes().unwrap();
    bytes.push(0);
    let result = Example::from_bytes(&bytes);
    assert!(matches!(result, Err(RecordError::Malformed(_))));
}

#[test]
fn test_from_bytes_rejects_garbage() {
    assert!(matches!(
        Example::from_bytes(&[]),
        Err(RecordError::Malformed(_))
    ));
    // 1 个特征，名字长度 3 但只给了 2 个字节
    let garbage = [1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, b'a', b'b'];
    assert!(matches!(
        Example::from_bytes(&garbage),
        Err(RecordError::Malformed(_))
    ));
}

#[test]
fn test_into_features() {
    let example = Example::new(sample_features());
    let features = example.clone().into_features();
    assert_eq!(&features, example.features());
}
