use glam::Vec2;
use pcp_chart::{Color, ReconcileAction, RenderReconciler, RowKey};

const RED: Color = Color::rgb(0xd62728);
const BLUE: Color = Color::rgb(0x1f77b4);

fn row_path(row: usize, out: &mut Vec<Vec2>) {
    out.clear();
    out.push(Vec2::new(row as f32, 0.0));
}

#[test]
fn test_first_pass_creates_every_curve() {
    let mut reconciler = RenderReconciler::new();
    let actions = reconciler.reconcile(&[5, 3, 1], row_path, |_| RED);

    assert_eq!(
        actions,
        vec![
            ReconcileAction::Create(RowKey(0)),
            ReconcileAction::Create(RowKey(1)),
            ReconcileAction::Create(RowKey(2)),
        ]
    );
    assert_eq!(reconciler.get(RowKey(1)).map(|c| c.row), Some(3));
    assert_eq!(
        reconciler.get(RowKey(2)).map(|c| c.points.clone()),
        Some(vec![Vec2::new(1.0, 0.0)])
    );
}

#[test]
fn test_shrink_removes_before_updating() {
    let mut reconciler = RenderReconciler::new();
    reconciler.reconcile(&[5, 3, 1], row_path, |_| RED);
    let actions = reconciler.reconcile(&[5], row_path, |_| BLUE);

    assert_eq!(
        actions,
        vec![
            ReconcileAction::Remove(RowKey(1)),
            ReconcileAction::Remove(RowKey(2)),
            ReconcileAction::Update(RowKey(0)),
        ]
    );
    assert_eq!(reconciler.keys().collect::<Vec<_>>(), vec![RowKey(0)]);
}

#[test]
fn test_colors_are_fixed_at_creation() {
    let mut reconciler = RenderReconciler::new();
    reconciler.reconcile(&[5], row_path, |_| RED);

    let mut asked = Vec::new();
    let actions = reconciler.reconcile(&[5, 3, 1, 4], row_path, |row| {
        asked.push(row);
        BLUE
    });

    assert_eq!(asked, vec![3, 1, 4]);
    assert_eq!(actions[0], ReconcileAction::Update(RowKey(0)));
    assert_eq!(reconciler.get(RowKey(0)).map(|c| c.color), Some(RED));
    assert_eq!(reconciler.get(RowKey(3)).map(|c| c.color), Some(BLUE));
}

#[test]
fn test_replaced_row_is_recreated() {
    let mut reconciler = RenderReconciler::new();
    reconciler.reconcile(&[5], row_path, |_| RED);
    let actions = reconciler.reconcile(&[9], row_path, |_| BLUE);

    assert_eq!(
        actions,
        vec![
            ReconcileAction::Remove(RowKey(0)),
            ReconcileAction::Create(RowKey(0)),
        ]
    );
    assert_eq!(reconciler.get(RowKey(0)).map(|c| c.row), Some(9));
    assert_eq!(reconciler.get(RowKey(0)).map(|c| c.color), Some(BLUE));
}

#[test]
fn test_refresh_only_updates() {
    let mut reconciler = RenderReconciler::new();
    reconciler.reconcile(&[2, 0, 1], row_path, |_| RED);

    let actions = reconciler.refresh(|row, out| {
        out.clear();
        out.push(Vec2::new(0.0, row as f32));
    });

    assert_eq!(actions.len(), 3);
    assert!(actions
        .iter()
        .all(|a| matches!(a, ReconcileAction::Update(_))));
    assert_eq!(
        reconciler.get(RowKey(0)).map(|c| c.points.clone()),
        Some(vec![Vec2::new(0.0, 2.0)])
    );
    assert_eq!(reconciler.len(), 3);
}

#[test]
fn test_clear_removes_everything() {
    let mut reconciler = RenderReconciler::new();
    reconciler.reconcile(&[0, 1], row_path, |_| RED);
    let actions = reconciler.clear();

    assert_eq!(
        actions,
        vec![
            ReconcileAction::Remove(RowKey(0)),
            ReconcileAction::Remove(RowKey(1)),
        ]
    );
    assert!(reconciler.is_empty());
}

#[test]
fn test_action_serialization() {
    let json = serde_json::to_string(&ReconcileAction::Create(RowKey(4))).unwrap();
    assert_eq!(json, r#"{"action":"create","key":4}"#);
}
