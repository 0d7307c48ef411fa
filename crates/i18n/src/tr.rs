// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Turkish UI strings.
pub(super) const TABLE: &[(&str, &str)] = &[
    // Navigation
    ("nav.employeeList", "Çalışan Listesi"),
    ("nav.addEmployee", "Çalışan Ekle"),
    // Page titles
    ("page.employeeList", "Çalışan Listesi"),
    ("page.addEmployee", "Yeni Çalışan Ekle"),
    // Table headers
    ("table.firstName", "Ad"),
    ("table.lastName", "Soyad"),
    ("table.dateOfEmployment", "İşe Başlama Tarihi"),
    ("table.dateOfBirth", "Doğum Tarihi"),
    ("table.phone", "Telefon"),
    ("table.email", "E-posta"),
    ("table.department", "Departman"),
    ("table.position", "Pozisyon"),
    ("table.actions", "İşlemler"),
    // Employee card labels
    ("card.department", "Departman"),
    ("card.position", "Pozisyon"),
    ("card.employmentDate", "İşe Başlama Tarihi"),
    ("card.email", "E-posta"),
    ("card.phone", "Telefon"),
    // Form labels
    ("form.firstName", "Ad"),
    ("form.lastName", "Soyad"),
    ("form.dateOfEmployment", "İşe Başlama Tarihi"),
    ("form.dateOfBirth", "Doğum Tarihi"),
    ("form.phone", "Telefon Numarası"),
    ("form.phoneFormat", "05XXXXXXXXX"),
    ("form.email", "E-posta Adresi"),
    ("form.emailFormat", "ornek@sirket.com"),
    ("form.department", "Departman"),
    ("form.selectDepartment", "Departman seçin"),
    ("form.position", "Pozisyon"),
    ("form.selectPosition", "Pozisyon seçin"),
    // Form validation errors
    ("error.required.firstName", "Ad alanı zorunludur"),
    ("error.required.lastName", "Soyad alanı zorunludur"),
    ("error.required.dateOfEmployment", "İşe başlama tarihi zorunludur"),
    (
        "error.future.dateOfEmployment",
        "İşe başlama tarihi gelecekte olamaz",
    ),
    ("error.required.dateOfBirth", "Doğum tarihi zorunludur"),
    ("error.future.dateOfBirth", "Doğum tarihi gelecekte olamaz"),
    ("error.tooYoung", "Çalışan en az 18 yaşında olmalıdır"),
    ("error.tooOld", "Lütfen geçerli bir doğum tarihi girin"),
    ("error.required.phone", "Telefon numarası zorunludur"),
    (
        "error.invalid.phone",
        "Lütfen geçerli bir telefon numarası girin (05XXXXXXXXX)",
    ),
    ("error.required.email", "E-posta adresi zorunludur"),
    ("error.invalid.email", "Lütfen geçerli bir e-posta adresi girin"),
    ("error.duplicate.email", "Bu e-posta adresi zaten kayıtlı"),
    ("error.required.department", "Departman seçimi zorunludur"),
    ("error.required.position", "Pozisyon seçimi zorunludur"),
    // Buttons
    ("button.add", "Çalışan Ekle"),
    ("button.update", "Çalışanı Güncelle"),
    ("button.cancel", "İptal"),
    ("button.delete", "Sil"),
    ("button.edit", "Düzenle"),
    ("button.tableView", "Tablo Görünümü"),
    ("button.listView", "Liste Görünümü"),
    ("button.proceed", "Devam Et"),
    // Confirmations
    (
        "confirm.add",
        "{{firstName}} {{lastName}} isimli çalışan kaydı eklenecek.",
    ),
    (
        "confirm.update",
        "{{firstName}} {{lastName}} isimli çalışan kaydı güncellenecek.",
    ),
    (
        "confirm.delete",
        "{{firstName}} {{lastName}} isimli çalışan kaydı silinecek.",
    ),
    ("confirm.title", "Emin misiniz?"),
    // Empty states
    ("empty.title", "Çalışan bulunamadı"),
    ("empty.message", "Veritabanında henüz çalışan bulunmamaktadır."),
    // Search
    ("search.placeholder", "Çalışan ara..."),
    // Select input
    ("select.placeholder", "Bir seçenek seçin"),
    // Modal
    ("modal.editEmployee", "Çalışanı Düzenle"),
];
