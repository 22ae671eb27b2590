use crate::domain::value::ApiMethod;

/// Explanation of a gateway `error_code` for the given method, if the code is documented.
///
/// Codes are method-specific: the same number can mean different things for `send`
/// and `senders`.
pub fn describe(method: ApiMethod, code: i64) -> Option<&'static str> {
    match method {
        ApiMethod::Send => describe_send(code),
        ApiMethod::Balance => describe_balance(code),
        ApiMethod::Senders => describe_senders(code),
        _ => None,
    }
}

fn describe_send(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Ошибка в параметрах",
        2 => "Неверный логин или пароль",
        3 => "Недостаточно средств на счете Клиента",
        4 => "IP-адрес временно заблокирован из-за частых ошибок в запросах",
        5 => "Неверный формат даты",
        6 => "Сообщение запрещено (по тексту или по имени отправителя)",
        7 => "Неверный формат номера телефона",
        8 => "Сообщение на указанный номер не может быть доставлено",
        9 => {
            "Отправка более одного одинакового запроса на передачу SMS-сообщения либо более пяти одинаковых запросов на получение стоимости сообщения в течение минуты"
        }
        _ => return None,
    })
}

fn describe_balance(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Ошибка в параметрах",
        2 => "Неверный логин или пароль",
        4 => "IP-адрес временно заблокирован из-за частых ошибок в запросах",
        9 => "Превышено количество одинаковых запросов на получение баланса в течение минуты",
        _ => return None,
    })
}

fn describe_senders(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Ошибка в параметрах",
        2 => "Неверный логин или пароль",
        3 => "Имя отправителя не найдено",
        4 => "IP-адрес временно заблокирован из-за частых ошибок в запросах",
        5 => "Ошибка сохранения или удаления имени отправителя",
        7 => "Неверный формат номера телефона",
        8 => "Неверный код подтверждения",
        9 => "Превышено количество одинаковых запросов в течение минуты",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_method_specific() {
        assert_eq!(
            describe(ApiMethod::Send, 3),
            Some("Недостаточно средств на счете Клиента")
        );
        assert_eq!(
            describe(ApiMethod::Senders, 3),
            Some("Имя отправителя не найдено")
        );
        assert_eq!(describe(ApiMethod::Balance, 3), None);
    }

    #[test]
    fn unknown_pairs_are_absent() {
        assert_eq!(describe(ApiMethod::Send, 42), None);
        assert_eq!(describe(ApiMethod::Info, 1), None);
    }
}
