//! Reserve tests - bounded LIFO invariants

use tui_piecerack::core::PieceReserve;
use tui_piecerack::types::{Piece, PieceKind, SupplyError, RESERVE_CAPACITY};

fn piece(id: u32) -> Piece {
    Piece::new(PieceKind::L, id)
}

#[test]
fn test_push_pop_lifo_order() {
    let mut reserve = PieceReserve::new();
    reserve.push(piece(0)).unwrap();
    reserve.push(piece(1)).unwrap();
    reserve.push(piece(2)).unwrap();

    assert_eq!(reserve.pop().unwrap().id, 2);
    assert_eq!(reserve.pop().unwrap().id, 1);
    assert_eq!(reserve.pop().unwrap().id, 0);
    assert!(reserve.is_empty());
}

#[test]
fn test_push_on_full_is_rejected_noop() {
    let mut reserve = PieceReserve::new();
    for id in 0..RESERVE_CAPACITY as u32 {
        reserve.push(piece(id)).unwrap();
    }
    assert!(reserve.is_full());

    let before: Vec<u32> = reserve.iter_from_top().map(|p| p.id).collect();
    assert_eq!(reserve.push(piece(99)), Err(SupplyError::ReserveFull));

    assert_eq!(reserve.len(), RESERVE_CAPACITY);
    let after: Vec<u32> = reserve.iter_from_top().map(|p| p.id).collect();
    assert_eq!(before, after);
}

#[test]
fn test_pop_empty_fails() {
    let mut reserve = PieceReserve::new();
    assert_eq!(reserve.pop(), Err(SupplyError::ReserveEmpty));
}

#[test]
fn test_peek_top_tracks_most_recent_push() {
    let mut reserve = PieceReserve::new();
    assert_eq!(reserve.peek_top(), Err(SupplyError::ReserveEmpty));

    reserve.push(piece(1)).unwrap();
    assert_eq!(reserve.peek_top().unwrap().id, 1);

    reserve.push(piece(2)).unwrap();
    assert_eq!(reserve.peek_top().unwrap().id, 2);

    reserve.pop().unwrap();
    assert_eq!(reserve.peek_top().unwrap().id, 1);
    assert_eq!(reserve.len(), 1);
}

#[test]
fn test_size_never_exceeds_capacity() {
    let mut reserve = PieceReserve::new();
    for id in 0..10 {
        let _ = reserve.push(piece(id));
        assert!(reserve.len() <= RESERVE_CAPACITY);
    }
    assert_eq!(reserve.len(), RESERVE_CAPACITY);
}

#[test]
fn test_iter_from_top_is_reverse_push_order() {
    let mut reserve = PieceReserve::new();
    reserve.push(piece(10)).unwrap();
    reserve.push(piece(11)).unwrap();
    reserve.push(piece(12)).unwrap();

    let ids: Vec<u32> = reserve.iter_from_top().map(|p| p.id).collect();
    assert_eq!(ids, vec![12, 11, 10]);
}
