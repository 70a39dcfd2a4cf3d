// Протокольный слой: контракт запрос/результат и граница внешнего сервиса

/// Типы запросов, результатов и форм границы внешнего сервиса
pub mod messages;

/// Валидация параметров запроса по реестру алгоритмов
pub mod validation;

/// Транспортное кодирование бинарных данных + классификация контейнеров
pub mod wire;

/// Граница внешнего сервиса (AES/RSA/stego) и шлюз аутентификации
pub mod transport;
