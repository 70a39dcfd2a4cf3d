// Классические шифры: сдвиговый (Цезарь), с бегущим ключом (Виженер),
// биграммный (Плейфер) и перестановочный (изгородь)
// Чистые функции, без состояния между вызовами

use crate::error::{Result, StegnoError};

// Модули каналов сдвигового шифра. Фиксированы самим алфавитом,
// поэтому это константы модуля, а не поля Config.
const LETTER_MODULUS: i32 = 26;
const DIGIT_MODULUS: i32 = 10;

/// Направление преобразования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Привести сдвиг к эффективному значению в [0, modulus) с учётом направления.
///
/// Дешифрование выполняется обратным сдвигом, причём у каждого канала
/// свой модуль: `(26 - s) mod 26` для букв и `(10 - s) mod 10` для цифр.
/// Прежние реализации фронтендов применяли к цифрам 26-базовый обратный сдвиг, из-за
/// чего цифровой канал недокручивался при сдвигах, не кратных 10; здесь оба
/// канала используют собственный корректный модуль (round-trip сходится).
fn effective_shift(shift: i32, modulus: i32, direction: Direction) -> u32 {
    let normalized = shift.rem_euclid(modulus);
    let applied = match direction {
        Direction::Encrypt => normalized,
        Direction::Decrypt => (modulus - normalized).rem_euclid(modulus),
    };
    applied as u32
}

/// Сдвиговый подстановочный шифр.
///
/// Буквы вращаются внутри 26-буквенного алфавита своего регистра, десятичные
/// цифры внутри 0-9, остальные символы проходят без изменений.
pub fn shift_transform(text: &str, shift: i32, direction: Direction) -> String {
    let letter_shift = effective_shift(shift, LETTER_MODULUS, direction);
    let digit_shift = effective_shift(shift, DIGIT_MODULUS, direction);

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let offset = (c as u8 - base) as u32;
                (base + ((offset + letter_shift) % 26) as u8) as char
            } else if c.is_ascii_digit() {
                let offset = (c as u8 - b'0') as u32;
                (b'0' + ((offset + digit_shift) % 10) as u8) as char
            } else {
                c
            }
        })
        .collect()
}

/// Шифр с бегущим ключом (Виженер).
///
/// Преобразуются только буквы; курсор ключа продвигается только когда
/// потреблён преобразуемый символ (пунктуация и пробелы курсор не двигают).
/// Сдвиг каждого символа равен позиции буквы ключа в алфавите (регистр ключа
/// не важен, регистр текста сохраняется).
///
/// # Errors
///
/// `InvalidKey`, если ключ пуст или содержит не-алфавитные символы.
pub fn running_key_transform(text: &str, key: &str, direction: Direction) -> Result<String> {
    if key.is_empty() {
        return Err(StegnoError::InvalidKey(
            "Running key cannot be empty".to_string(),
        ));
    }
    if !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(StegnoError::InvalidKey(
            "Running key must contain only alphabetic characters".to_string(),
        ));
    }

    // Нормализуем ключ к нулевым позициям алфавита один раз
    let key_shifts: Vec<u32> = key
        .chars()
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as u32)
        .collect();

    let mut key_index = 0usize;
    let result = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = key_shifts[key_index % key_shifts.len()];
                key_index += 1;

                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let offset = (c as u8 - base) as u32;
                let rotated = match direction {
                    Direction::Encrypt => (offset + shift) % 26,
                    Direction::Decrypt => (offset + 26 - shift) % 26,
                };
                (base + rotated as u8) as char
            } else {
                c
            }
        })
        .collect();

    Ok(result)
}

// Алфавит Плейфера: 25 букв, J сворачивается в I
const PLAYFAIR_ALPHABET: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Матрица 5x5 из ключа + таблица позиций буква → индекс матрицы
fn playfair_matrix(key: &str) -> ([u8; 25], [usize; 26]) {
    let mut matrix = [0u8; 25];
    let mut used = [false; 25];
    let mut filled = 0usize;

    let mut place = |letter: u8, matrix: &mut [u8; 25], filled: &mut usize| {
        let slot = (letter - b'A') as usize - usize::from(letter > b'J');
        if !used[slot] {
            used[slot] = true;
            matrix[*filled] = letter;
            *filled += 1;
        }
    };

    for c in key.chars().filter(|c| c.is_ascii_alphabetic()) {
        let mut letter = c.to_ascii_uppercase() as u8;
        if letter == b'J' {
            letter = b'I';
        }
        place(letter, &mut matrix, &mut filled);
    }
    for &letter in PLAYFAIR_ALPHABET {
        place(letter, &mut matrix, &mut filled);
    }

    let mut positions = [0usize; 26];
    for (index, &letter) in matrix.iter().enumerate() {
        positions[(letter - b'A') as usize] = index;
    }
    positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];

    (matrix, positions)
}

/// Нормализовать текст Плейфера: верхний регистр, J → I, только буквы
fn playfair_letters(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| {
            let letter = c.to_ascii_uppercase() as u8;
            if letter == b'J' {
                b'I'
            } else {
                letter
            }
        })
        .collect()
}

/// Биграммный шифр (Плейфер).
///
/// Текст нормализуется (верхний регистр, J → I, не-буквы отбрасываются) и
/// режется на биграммы; на шифровании нечётный хвост и удвоенные буквы
/// добиваются X, на расшифровании неполная последняя биграмма отбрасывается.
/// Преобразование необратимо для регистра и пунктуации, это свойство
/// самого шифра.
///
/// # Errors
///
/// `InvalidKey`, если в ключе нет ни одной буквы.
pub fn digraph_transform(text: &str, key: &str, direction: Direction) -> Result<String> {
    if !key.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(StegnoError::InvalidKey(
            "Playfair key must contain at least one letter".to_string(),
        ));
    }

    let (matrix, positions) = playfair_matrix(key);
    let letters = playfair_letters(text);

    let mut digraphs: Vec<(u8, u8)> = Vec::with_capacity(letters.len() / 2 + 1);
    match direction {
        Direction::Encrypt => {
            let mut i = 0;
            while i < letters.len() {
                if i + 1 == letters.len() || letters[i] == letters[i + 1] {
                    digraphs.push((letters[i], b'X'));
                    i += 1;
                } else {
                    digraphs.push((letters[i], letters[i + 1]));
                    i += 2;
                }
            }
        }
        Direction::Decrypt => {
            for pair in letters.chunks_exact(2) {
                digraphs.push((pair[0], pair[1]));
            }
        }
    }

    // Сдвиг строки/столбца: +1 на шифровании, -1 (т.е. +4 mod 5) на расшифровании
    let step = match direction {
        Direction::Encrypt => 1,
        Direction::Decrypt => 4,
    };

    let mut out = String::with_capacity(digraphs.len() * 2);
    for (a, b) in digraphs {
        let first = positions[(a - b'A') as usize];
        let second = positions[(b - b'A') as usize];
        let (row1, col1) = (first / 5, first % 5);
        let (row2, col2) = (second / 5, second % 5);

        let (x, y) = if row1 == row2 {
            (
                matrix[row1 * 5 + (col1 + step) % 5],
                matrix[row2 * 5 + (col2 + step) % 5],
            )
        } else if col1 == col2 {
            (
                matrix[((row1 + step) % 5) * 5 + col1],
                matrix[((row2 + step) % 5) * 5 + col2],
            )
        } else {
            // Прямоугольник: обмен столбцами
            (matrix[row1 * 5 + col2], matrix[row2 * 5 + col1])
        };
        out.push(x as char);
        out.push(y as char);
    }

    Ok(out)
}

/// Перестановочный шифр "железнодорожная изгородь".
///
/// Символы раскладываются зигзагом по `rails` рельсам и считываются
/// построчно; расшифрование восстанавливает зигзаг по той же схеме.
/// Алфавит не важен, преобразуются все символы.
///
/// # Errors
///
/// `InvalidInput`, если рельсов меньше двух.
pub fn rail_fence_transform(text: &str, rails: i32, direction: Direction) -> Result<String> {
    if rails < 2 {
        return Err(StegnoError::InvalidInput(
            "Number of rails must be at least 2".to_string(),
        ));
    }
    let rails = rails as usize;
    let chars: Vec<char> = text.chars().collect();

    // Номер рельса для каждой позиции зигзага
    let mut pattern = Vec::with_capacity(chars.len());
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..chars.len() {
        pattern.push(rail);
        if down {
            rail += 1;
            if rail == rails - 1 {
                down = false;
            }
        } else {
            rail -= 1;
            if rail == 0 {
                down = true;
            }
        }
    }

    match direction {
        Direction::Encrypt => {
            let mut out = String::with_capacity(chars.len());
            for current in 0..rails {
                for (position, &r) in pattern.iter().enumerate() {
                    if r == current {
                        out.push(chars[position]);
                    }
                }
            }
            Ok(out)
        }
        Direction::Decrypt => {
            let mut restored = vec!['\0'; chars.len()];
            let mut next = 0usize;
            for current in 0..rails {
                for (position, &r) in pattern.iter().enumerate() {
                    if r == current {
                        restored[position] = chars[next];
                        next += 1;
                    }
                }
            }
            Ok(restored.into_iter().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_encrypt_known_vector() {
        // Буквы вращаются на 3, цифра 5 → 8
        let out = shift_transform("Attack at 5", 3, Direction::Encrypt);
        assert_eq!(out, "Dwwdfn dw 8");
    }

    #[test]
    fn test_shift_roundtrip_all_shifts() {
        let text = "The quick brown Fox 0123456789, jumps!";
        for s in 1..=25 {
            let enc = shift_transform(text, s, Direction::Encrypt);
            let dec = shift_transform(&enc, s, Direction::Decrypt);
            assert_eq!(dec, text, "round-trip failed for shift {}", s);
        }
    }

    #[test]
    fn test_shift_digit_channel_own_inverse() {
        // Сдвиг 7 не кратен 10: 26-базовый обратный сдвиг здесь бы разошёлся
        let enc = shift_transform("7", 7, Direction::Encrypt);
        assert_eq!(enc, "4");
        let dec = shift_transform(&enc, 7, Direction::Decrypt);
        assert_eq!(dec, "7");
    }

    #[test]
    fn test_shift_negative_and_large() {
        assert_eq!(
            shift_transform("abc", 29, Direction::Encrypt),
            shift_transform("abc", 3, Direction::Encrypt)
        );
        let enc = shift_transform("xyz", -3, Direction::Encrypt);
        assert_eq!(shift_transform(&enc, -3, Direction::Decrypt), "xyz");
    }

    #[test]
    fn test_shift_preserves_case_and_symbols() {
        let out = shift_transform("Hello, World!", 1, Direction::Encrypt);
        assert_eq!(out, "Ifmmp, Xpsme!");
    }

    #[test]
    fn test_running_key_roundtrip() {
        let text = "Hello, World!";
        let enc = running_key_transform(text, "KEY", Direction::Encrypt).unwrap();
        let dec = running_key_transform(&enc, "key", Direction::Decrypt).unwrap();
        assert_eq!(dec, text);
    }

    #[test]
    fn test_running_key_cursor_skips_non_alphabetic() {
        // Курсор ключа не двигается на запятой/пробеле/воскл. знаке.
        // "Hello, World!" с ключом KEY: H+K E+E L+Y | L+K O+E | W+Y O+K R+E L+Y D+K
        let enc = running_key_transform("Hello, World!", "KEY", Direction::Encrypt).unwrap();
        assert_eq!(enc, "Rijvs, Uyvjn!");
        // Не-алфавитные символы не изменяются
        assert_eq!(&enc[5..7], ", ");
        assert!(enc.ends_with('!'));
    }

    #[test]
    fn test_playfair_known_vector() {
        // Классическая пара: MONARCHY / "instruments"
        let enc = digraph_transform("instruments", "MONARCHY", Direction::Encrypt).unwrap();
        assert_eq!(enc, "GATLMZCLRQXA");
        let dec = digraph_transform(&enc, "monarchy", Direction::Decrypt).unwrap();
        // Подготовка текста необратима: X-добивка и регистр остаются
        assert_eq!(dec, "INSTRUMENTSX");
    }

    #[test]
    fn test_playfair_doubled_letters_and_j() {
        // Удвоенная буква разбивается X-ом, J сворачивается в I
        let enc = digraph_transform("balloon jam", "keyword", Direction::Encrypt).unwrap();
        assert_eq!(enc.len() % 2, 0);
        let dec = digraph_transform(&enc, "keyword", Direction::Decrypt).unwrap();
        assert!(dec.starts_with("BALX"));
        assert!(dec.contains("IAM"));
    }

    #[test]
    fn test_playfair_key_without_letters_rejected() {
        let err = digraph_transform("text", "123", Direction::Encrypt).unwrap_err();
        assert!(matches!(err, StegnoError::InvalidKey(_)));
    }

    #[test]
    fn test_rail_fence_known_vector() {
        let enc =
            rail_fence_transform("WEAREDISCOVEREDFLEEATONCE", 3, Direction::Encrypt).unwrap();
        assert_eq!(enc, "WECRLTEERDSOEEFEAOCAIVDEN");
        let dec = rail_fence_transform(&enc, 3, Direction::Decrypt).unwrap();
        assert_eq!(dec, "WEAREDISCOVEREDFLEEATONCE");
    }

    #[test]
    fn test_rail_fence_roundtrip_preserves_everything() {
        // Перестановка не трогает сами символы: пунктуация и регистр целы
        let text = "Hello, World! 123";
        for rails in 2..=6 {
            let enc = rail_fence_transform(text, rails, Direction::Encrypt).unwrap();
            let dec = rail_fence_transform(&enc, rails, Direction::Decrypt).unwrap();
            assert_eq!(dec, text, "round-trip failed for {} rails", rails);
        }
    }

    #[test]
    fn test_rail_fence_too_few_rails_rejected() {
        let err = rail_fence_transform("text", 1, Direction::Encrypt).unwrap_err();
        assert!(matches!(err, StegnoError::InvalidInput(_)));
    }

    #[test]
    fn test_running_key_empty_rejected() {
        let err = running_key_transform("text", "", Direction::Encrypt).unwrap_err();
        assert!(matches!(err, StegnoError::InvalidKey(_)));
    }

    #[test]
    fn test_running_key_non_alphabetic_rejected() {
        let err = running_key_transform("text", "abc123", Direction::Encrypt).unwrap_err();
        assert!(matches!(err, StegnoError::InvalidKey(_)));
    }
}
