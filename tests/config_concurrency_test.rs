use posture_check::domain::model::{PostureStatus, POSE_LANDMARK_COUNT};
use posture_check::{
    JsonLandmarkEstimator, Landmark, LandmarkSet, PoseLandmark, PostureConfig,
    PostureConfigStore, PostureError, PostureService,
};
use std::sync::Arc;

const STRICT: PostureConfig = PostureConfig {
    right_min_angle: -80,
    right_max_angle: -63,
    left_min_angle: 80,
    left_max_angle: 115,
};

const RELAXED: PostureConfig = PostureConfig {
    right_min_angle: -90,
    right_max_angle: -40,
    left_min_angle: 60,
    left_max_angle: 130,
};

/// Right side at -45 degrees, left side at 70 degrees. Both sides are bad under STRICT
/// and good under RELAXED, so exactly one bad side means bands from both configs were mixed.
fn forward_head() -> LandmarkSet {
    let mut landmarks = vec![Landmark::default(); POSE_LANDMARK_COUNT];
    landmarks[PoseLandmark::RightShoulder.index()] = Landmark::new(0.5, 0.5, 0.0, 0.9);
    landmarks[PoseLandmark::RightEar.index()] = Landmark::new(0.6, 0.4, 0.0, 0.9);

    let left_raw = (-70.0f64).to_radians();
    landmarks[PoseLandmark::LeftShoulder.index()] = Landmark::new(0.5, 0.5, 0.0, 0.9);
    landmarks[PoseLandmark::LeftEar.index()] = Landmark::new(
        0.5 + 0.1 * left_raw.cos(),
        0.5 + 0.1 * left_raw.sin(),
        0.0,
        0.9,
    );
    LandmarkSet::new(landmarks).unwrap()
}

#[test]
fn test_forward_head_verdict_per_config() {
    let landmarks = forward_head();
    let status_under = |config: PostureConfig| {
        let service = PostureService::new(
            JsonLandmarkEstimator::new(),
            Arc::new(PostureConfigStore::new(config).unwrap()),
        );
        service.classify(&landmarks).unwrap().status
    };

    assert_eq!(status_under(STRICT), PostureStatus::BadBack);
    assert_eq!(status_under(RELAXED), PostureStatus::Good);
    // Right band from RELAXED with left band from STRICT.
    let mixed = PostureConfig {
        left_min_angle: STRICT.left_min_angle,
        left_max_angle: STRICT.left_max_angle,
        ..RELAXED
    };
    assert_eq!(status_under(mixed), PostureStatus::BadNeck);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_never_see_torn_config() {
    let store = Arc::new(PostureConfigStore::new(STRICT).unwrap());

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for i in 0..2_000 {
                let next = if i % 2 == 0 { RELAXED } else { STRICT };
                store.update_config(next).unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for _ in 0..2_000 {
                    let seen = store.get_config();
                    assert!(seen == STRICT || seen == RELAXED, "torn config: {:?}", seen);
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_classify_during_updates() {
    let service = Arc::new(PostureService::new(
        JsonLandmarkEstimator::new(),
        Arc::new(PostureConfigStore::new(STRICT).unwrap()),
    ));
    let landmarks = Arc::new(forward_head());

    let writer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for i in 0..1_000 {
                let next = if i % 2 == 0 { RELAXED } else { STRICT };
                service
                    .update_config(
                        next.right_min_angle,
                        next.right_max_angle,
                        next.left_min_angle,
                        next.left_max_angle,
                    )
                    .unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let classifiers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            let landmarks = Arc::clone(&landmarks);
            tokio::spawn(async move {
                for _ in 0..1_000 {
                    let verdict = service.classify(&landmarks).unwrap();
                    assert_ne!(
                        verdict.status,
                        PostureStatus::BadNeck,
                        "classified against a mixed config: {:?}",
                        verdict
                    );
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    writer.await.unwrap();
    for task in classifiers {
        task.await.unwrap();
    }

    // Writer finished on STRICT.
    assert_eq!(service.get_config(), STRICT);
    assert_eq!(
        service.classify(&landmarks).unwrap().status,
        PostureStatus::BadBack
    );
}

#[test]
fn test_rejected_update_keeps_previous_config() {
    let store = PostureConfigStore::new(RELAXED).unwrap();
    let err = store
        .update_config(PostureConfig {
            right_min_angle: -40,
            right_max_angle: -90,
            ..RELAXED
        })
        .unwrap_err();

    assert!(matches!(err, PostureError::ConfigValidationError { .. }));
    assert_eq!(store.get_config(), RELAXED);
}

#[test]
fn test_store_rejects_inverted_initial_config() {
    let inverted = PostureConfig {
        left_min_angle: 130,
        left_max_angle: 60,
        ..STRICT
    };
    assert!(PostureConfigStore::new(inverted).is_err());
}
