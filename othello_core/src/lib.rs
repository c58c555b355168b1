//! Othello (Reversi) core logic.
//!
//! このクレートは盤面ルールとゲーム進行を管理する `engine` と、手を選択する `ai` を提供します。
//! 描画や入力処理（`othello_cli`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// 盤面ルール・ゲーム進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
