//! Translations
//!
//! Locale selection and the static display-string dictionary. Uzbek is the
//! default; Russian is the alternative. Unknown keys fall through verbatim
//! so a missing entry is visible in the UI instead of blank.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Uz,
    Ru,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uz => "uz",
            Self::Ru => "ru",
        }
    }

    /// Parse a persisted locale; anything unknown falls back to the default
    pub fn from_str(value: &str) -> Self {
        match value {
            "ru" => Self::Ru,
            _ => Self::Uz,
        }
    }
}

pub fn translate(locale: Locale, key: &str) -> String {
    match lookup(key) {
        Some((uz, ru)) => match locale {
            Locale::Uz => uz.to_string(),
            Locale::Ru => ru.to_string(),
        },
        None => key.to_string(),
    }
}

fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        // Navigation
        "nav.dashboard" => ("Boshqaruv paneli", "Панель управления"),
        "nav.drivers" => ("Haydovchilar", "Водители"),
        "nav.orders" => ("Buyurtmalar", "Заказы"),
        "nav.payments" => ("To'lovlar", "Платежи"),
        "nav.ratings" => ("Baholar", "Оценки"),
        "nav.statistics" => ("Statistika", "Статистика"),
        "nav.settings" => ("Sozlamalar", "Настройки"),
        "nav.logout" => ("Chiqish", "Выйти"),

        // Common
        "common.search" => ("Qidirish...", "Поиск..."),
        "common.loading" => ("Yuklanmoqda...", "Загрузка..."),
        "common.save" => ("Saqlash", "Сохранить"),
        "common.saving" => ("Saqlanmoqda...", "Сохранение..."),
        "common.cancel" => ("Bekor qilish", "Отмена"),
        "common.edit" => ("Tahrirlash", "Изменить"),
        "common.delete" => ("O'chirish", "Удалить"),
        "common.confirm" => ("Tasdiqlash", "Подтвердить"),
        "common.add" => ("Qo'shish", "Добавить"),
        "common.actions" => ("Amallar", "Действия"),
        "common.status" => ("Holat", "Статус"),
        "common.all" => ("Barchasi", "Все"),
        "common.close" => ("Yopish", "Закрыть"),
        "common.saved" => ("Saqlandi", "Сохранено"),
        "common.deleted" => ("O'chirildi", "Удалено"),
        "common.shown" => ("ko'rsatilmoqda", "показано"),
        "common.empty" => ("Ma'lumot yo'q", "Нет данных"),
        "common.date" => ("Sana", "Дата"),

        // Login
        "login.title" => ("Admin panelga kirish", "Вход в админ-панель"),
        "login.username" => ("Foydalanuvchi nomi", "Имя пользователя"),
        "login.password" => ("Parol", "Пароль"),
        "login.submit" => ("Kirish", "Войти"),
        "login.failed" => ("Kirish amalga oshmadi", "Не удалось войти"),

        // Statuses
        "status.pending" => ("Kutilmoqda", "Ожидает"),
        "status.assigned" => ("Biriktirilgan", "Назначено"),
        "status.approved" => ("Tasdiqlangan", "Одобрено"),
        "status.rejected" => ("Rad etilgan", "Отклонено"),
        "status.accepted" => ("Qabul qilingan", "Принят"),
        "status.cancelled" => ("Bekor qilingan", "Отменён"),
        "status.active" => ("Faol", "Активен"),
        "status.inactive" => ("Nofaol", "Неактивен"),

        // Categories and directions
        "category.taxi" => ("Taxi", "Такси"),
        "category.parcel" => ("Pasilka", "Посылка"),
        "category.cargo" => ("Gruz", "Груз"),
        "direction.taxi" => ("Taxi", "Такси"),
        "direction.cargo" => ("Gruz", "Груз"),
        "service.taxi_parcel" => ("Taxi/Pasilka", "Такси/Посылка"),
        "service.cargo" => ("Gruz", "Груз"),

        // Drivers
        "drivers.name" => ("F.I.Sh.", "Ф.И.О."),
        "drivers.phone" => ("Telefon", "Телефон"),
        "drivers.car" => ("Avtomobil", "Автомобиль"),
        "drivers.car_number" => ("Davlat raqami", "Гос. номер"),
        "drivers.direction" => ("Yo'nalish", "Направление"),
        "drivers.approve" => ("Tasdiqlash", "Одобрить"),
        "drivers.reject" => ("Rad etish", "Отклонить"),
        "drivers.ban" => ("Ban qilish", "Забанить"),
        "drivers.details" => ("Batafsil", "Подробно"),
        "drivers.balance" => ("Ball balansi", "Баланс баллов"),
        "drivers.add_balls" => ("Ball qo'shish", "Добавить баллы"),
        "drivers.ball_amount" => ("Ball miqdori", "Количество баллов"),
        "drivers.documents" => ("Hujjatlar", "Документы"),
        "drivers.passport" => ("Pasport", "Паспорт"),
        "drivers.license" => ("Haydovchilik guvohnomasi", "Водительские права"),
        "drivers.sts" => ("Texnik pasport", "Техпаспорт"),
        "drivers.car_photo" => ("Avtomobil surati", "Фото автомобиля"),
        "drivers.rating" => ("Reyting", "Рейтинг"),
        "drivers.no_rating" => ("Baholanmagan", "Нет оценок"),
        "drivers.banned" => ("Haydovchi ban qilindi", "Водитель забанен"),

        // Orders and tickets
        "orders.client" => ("Mijoz", "Клиент"),
        "orders.route" => ("Yo'nalish", "Маршрут"),
        "orders.category" => ("Turi", "Тип"),
        "orders.driver" => ("Haydovchi", "Водитель"),
        "orders.accept" => ("Qabul qilish", "Принять"),
        "orders.passengers" => ("Yo'lovchilar", "Пассажиры"),
        "orders.driver_id" => ("Haydovchi ID", "ID водителя"),
        "orders.tab_orders" => ("Buyurtmalar", "Заказы"),
        "orders.tab_flight" => ("Avia chiptalar", "Авиабилеты"),
        "orders.tab_train" => ("Poyezd chiptalar", "Ж/д билеты"),
        "tickets.passenger" => ("Yo'lovchi", "Пассажир"),
        "tickets.passport" => ("Pasport", "Паспорт"),
        "tickets.travel_date" => ("Safar sanasi", "Дата поездки"),
        "tickets.comment" => ("Admin izohi", "Комментарий админа"),

        // Payments
        "payments.driver" => ("Haydovchi", "Водитель"),
        "payments.amount" => ("Summa", "Сумма"),
        "payments.screenshot" => ("Skrinshot", "Скриншот"),
        "payments.approve" => ("Tasdiqlash", "Одобрить"),
        "payments.reject" => ("Rad etish", "Отклонить"),
        "payments.rejection_reason" => ("Rad etish sababi", "Причина отказа"),

        // Ratings
        "ratings.client" => ("Mijoz", "Клиент"),
        "ratings.driver" => ("Haydovchi", "Водитель"),
        "ratings.score" => ("Baho", "Оценка"),
        "ratings.comment" => ("Izoh", "Комментарий"),
        "ratings.summary" => ("Haydovchilar reytingi", "Рейтинг водителей"),
        "ratings.average" => ("O'rtacha baho", "Средняя оценка"),
        "ratings.count" => ("Baholar soni", "Кол-во оценок"),

        // Statistics
        "stats.users" => ("Foydalanuvchilar", "Пользователи"),
        "stats.drivers" => ("Haydovchilar", "Водители"),
        "stats.clients" => ("Mijozlar", "Клиенты"),
        "stats.orders" => ("Buyurtmalar", "Заказы"),
        "stats.payments" => ("To'lovlar", "Платежи"),
        "stats.applications" => ("Arizalar", "Заявки"),
        "stats.tickets" => ("Chiptalar", "Билеты"),
        "stats.ratings" => ("Baholar", "Оценки"),
        "stats.total" => ("Jami", "Всего"),
        "stats.today" => ("Bugun", "Сегодня"),
        "stats.week" => ("Hafta", "Неделя"),
        "stats.month" => ("Oy", "Месяц"),
        "stats.revenue" => ("Umumiy daromad", "Общий доход"),
        "stats.pending_applications" => ("Kutilayotgan arizalar", "Заявки в ожидании"),
        "stats.pending_payments" => ("Kutilayotgan to'lovlar", "Платежи в ожидании"),
        "stats.recent_activity" => ("So'nggi faollik", "Последняя активность"),
        "stats.new_order" => ("Yangi buyurtma", "Новый заказ"),
        "stats.payment_request" => ("To'lov so'rovi", "Запрос на оплату"),
        "stats.balls_paid" => ("To'langan balllar", "Оплачено баллов"),

        // Settings
        "settings.bot" => ("Bot sozlamalari", "Настройки бота"),
        "settings.bot_token" => ("Bot token", "Токен бота"),
        "settings.admin_id" => ("Admin ID", "ID админа"),
        "settings.channel_name" => ("Kanal nomi", "Название канала"),
        "settings.channel_link" => ("Kanal havolasi", "Ссылка на канал"),
        "settings.groups" => ("Guruh sozlamalari", "Настройки групп"),
        "settings.admin_group" => ("Admin guruh ID", "ID админ-группы"),
        "settings.taxi_parcel_group" => ("Taxi/Pasilka guruh ID", "ID группы такси/посылок"),
        "settings.avia_train_group" => ("Avia/Poyezd guruh ID", "ID группы авиа/ж-д"),
        "settings.cargo_group" => ("Gruz guruh ID", "ID группы грузов"),
        "settings.reminder" => ("To'lov eslatmasi", "Напоминание об оплате"),
        "settings.reminder_day" => ("Eslatma kuni", "День напоминания"),
        "settings.reminder_active" => ("Faol", "Активно"),
        "settings.reminder_last_sent" => ("Oxirgi yuborilgan", "Последняя отправка"),
        "settings.reminder_test" => ("Sinov yuborish", "Тестовая отправка"),
        "settings.reminder_sent" => ("Eslatma yuborildi", "Напоминание отправлено"),
        "settings.packages" => ("Ball paketlari", "Пакеты баллов"),
        "settings.package_name" => ("Paket nomi", "Название пакета"),
        "settings.ball_count" => ("Ball soni", "Кол-во баллов"),
        "settings.price" => ("Narxi", "Цена"),
        "settings.discount" => ("Chegirma %", "Скидка %"),
        "settings.popular" => ("Ommabop", "Популярный"),
        "settings.cards" => ("To'lov kartalari", "Платёжные карты"),
        "settings.card_number" => ("Karta raqami", "Номер карты"),
        "settings.cardholder" => ("Karta egasi", "Владелец карты"),
        "settings.bank" => ("Bank", "Банк"),
        "settings.locations" => ("Hududlar", "Регионы"),
        "settings.countries" => ("Davlatlar", "Страны"),
        "settings.regions" => ("Viloyatlar", "Области"),
        "settings.cities" => ("Shaharlar", "Города"),
        "settings.country_code" => ("Davlat kodi", "Код страны"),
        "settings.name_uz" => ("Nomi (uz)", "Название (уз)"),
        "settings.name_ru" => ("Nomi (ru)", "Название (ру)"),
        "settings.name_en" => ("Nomi (en)", "Название (англ)"),
        "settings.name_tj" => ("Nomi (tj)", "Название (тадж)"),
        "settings.name_kk" => ("Nomi (kk)", "Название (каз)"),
        "settings.branding" => ("Brending", "Брендинг"),
        "settings.org_name" => ("Tashkilot nomi", "Название организации"),
        "settings.logo" => ("Logotip (URL)", "Логотип (URL)"),

        // Errors
        "error.bad_request" => ("Noto'g'ri ma'lumotlar kiritildi", "Введены неверные данные"),
        "error.unauthorized" => ("Avtorizatsiya talab qilinadi", "Требуется авторизация"),
        "error.forbidden" => ("Ruxsat yo'q", "Нет доступа"),
        "error.not_found" => ("Ma'lumot topilmadi", "Данные не найдены"),
        "error.server" => (
            "Server xatoligi. Iltimos, keyinroq urinib ko'ring.",
            "Ошибка сервера. Пожалуйста, попробуйте позже.",
        ),
        "error.timeout" => (
            "Server bilan bog'lanishda muammo. Iltimos, qaytadan urinib ko'ring.",
            "Проблема соединения с сервером. Пожалуйста, попробуйте снова.",
        ),
        "error.network" => (
            "Tarmoq xatoligi. Server ishlayotganini tekshiring.",
            "Сетевая ошибка. Проверьте, что сервер запущен.",
        ),
        "error.decode" => ("Server javobini o'qib bo'lmadi", "Не удалось разобрать ответ сервера"),
        "error.required" => ("Majburiy maydonlarni to'ldiring", "Заполните обязательные поля"),

        _ => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_uzbek() {
        assert_eq!(Locale::default(), Locale::Uz);
    }

    #[test]
    fn test_from_str_falls_back_on_unknown() {
        assert_eq!(Locale::from_str("ru"), Locale::Ru);
        assert_eq!(Locale::from_str("uz"), Locale::Uz);
        assert_eq!(Locale::from_str("de"), Locale::Uz);
        assert_eq!(Locale::from_str(""), Locale::Uz);
    }

    #[test]
    fn test_translate_picks_locale() {
        assert_eq!(translate(Locale::Uz, "nav.drivers"), "Haydovchilar");
        assert_eq!(translate(Locale::Ru, "nav.drivers"), "Водители");
    }

    #[test]
    fn test_translate_unknown_key_passes_through() {
        assert_eq!(translate(Locale::Uz, "nav.bogus"), "nav.bogus");
    }
}
