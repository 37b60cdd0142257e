//! structure.xml fixtures.

/// Animal / Dog with an overriding method.
pub const ANIMALS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<project version="2.0.0">
  <file path="src/Zoo/Animal.php">
    <class namespace="Zoo" abstract="true" final="false">
      <name>Animal</name>
      <full_name>\Zoo\Animal</full_name>
      <docblock>
        <description>Base of every animal.</description>
        <long-description>Animals eat and speak.</long-description>
      </docblock>
      <method visibility="public" static="false" abstract="true">
        <name>speak</name>
        <docblock><tag name="return" type="string"/></docblock>
      </method>
      <method visibility="public" static="false">
        <name>eat</name>
        <argument><name>$food</name><type>\Zoo\Food</type></argument>
        <docblock>
          <description>Eat something.</description>
          <tag name="param" variable="$food" type="\Zoo\Food|null" description="What to eat"/>
          <tag name="return" type="bool"/>
        </docblock>
      </method>
    </class>
  </file>
  <file path="src/Zoo/Dog.php">
    <class namespace="Zoo" abstract="false" final="true">
      <name>Dog</name>
      <full_name>\Zoo\Dog</full_name>
      <extends>\Zoo\Animal</extends>
      <method visibility="public">
        <name>speak</name>
        <docblock><tag name="return" type="string"/></docblock>
      </method>
    </class>
  </file>
  <file path="src/Zoo/Food.php">
    <class namespace="Zoo">
      <name>Food</name>
      <full_name>\Zoo\Food</full_name>
    </class>
  </file>
</project>"#;

/// Base declares a protected and a private property; Derived extends Base.
pub const BASE_DERIVED: &str = r#"<project>
  <file path="src/Base.php">
    <class>
      <name>Base</name>
      <full_name>\Base</full_name>
      <property visibility="protected"><name>$a</name>
        <docblock><tag name="var" type="int"/></docblock>
      </property>
      <property visibility="private"><name>$b</name>
        <docblock><tag name="var"><type>string</type></tag></docblock>
      </property>
      <constant><name>LIMIT</name><value>10</value></constant>
    </class>
    <class>
      <name>Derived</name>
      <full_name>\Derived</full_name>
      <extends>\Base</extends>
    </class>
  </file>
</project>"#;

/// Interfaces, traits, a deprecated class and free functions across
/// two namespaces.
pub const LIBRARY: &str = r#"<project>
  <file path="src/App/Model/User.php">
    <interface namespace="App\Model">
      <name>Identifiable</name>
      <full_name>\App\Model\Identifiable</full_name>
      <method visibility="public"><name>id</name>
        <docblock><tag name="return" type="int"/></docblock>
      </method>
    </interface>
    <trait namespace="App\Model">
      <name>Timestamps</name>
      <full_name>\App\Model\Timestamps</full_name>
    </trait>
    <class namespace="App\Model">
      <name>User</name>
      <full_name>\App\Model\User</full_name>
      <implements>\App\Model\Identifiable</implements>
      <implements>\Vendor\Serializable</implements>
      <docblock><tag name="deprecated" description="Use Account"/></docblock>
      <property visibility="public" static="true"><name>$count</name><default>0</default></property>
      <method visibility="public"><name>name</name>
        <docblock>
          <tag name="see" link="\App\Model\Identifiable::id()"/>
          <tag name="see" refers="\App\Lib\Util"/>
        </docblock>
      </method>
    </class>
  </file>
  <file path="src/App/Model/Post.php">
    <class namespace="App\Model">
      <name>Post</name>
      <full_name>\App\Model\Post</full_name>
    </class>
  </file>
  <file path="src/Lib/Util.php">
    <class namespace="Lib">
      <name>Util</name>
      <full_name>\Lib\Util</full_name>
    </class>
  </file>
  <file path="src/functions/strings.php">
    <function>
      <name>slugify</name>
      <argument><name>$text</name><type>string</type></argument>
      <argument><name>$separator</name><type>string</type><default>'-'</default></argument>
      <docblock>
        <description>Turn text into a URL slug.</description>
        <tag name="return" type="string"/>
      </docblock>
    </function>
  </file>
</project>"#;

/// Two classes extending each other.
pub const CYCLE: &str = r#"<project>
  <file path="src/Cycle.php">
    <class><name>A</name><full_name>\A</full_name><extends>\B</extends>
      <method visibility="public"><name>fromA</name></method>
    </class>
    <class><name>B</name><full_name>\B</full_name><extends>\A</extends>
      <method visibility="public"><name>fromB</name></method>
    </class>
  </file>
</project>"#;
